//! Flashcard study module

mod deck;

pub use deck::*;
