//! Flashcard study deck
//!
//! Unscored review of the whole catalog: the deck is shuffled once at
//! creation and then paged through card by card, flipping between question
//! and answer. The caller may persist the position and resume later.

use rand::Rng;

use crate::catalog::{CategoryFilter, Question, QuestionCatalog};
use crate::error::{QuizError, Result};
use crate::pool;

/// One pass through the shuffled catalog
#[derive(Debug, Clone)]
pub struct StudyDeck {
    cards: Vec<Question>,
    index: usize,
    flipped: bool,
}

impl StudyDeck {
    /// Shuffle the whole catalog into a deck
    pub fn new<R: Rng>(catalog: &QuestionCatalog, rng: &mut R) -> Result<Self> {
        if catalog.is_empty() {
            return Err(QuizError::EmptyPool(CategoryFilter::All.to_string()));
        }

        let mut cards: Vec<Question> = catalog.questions().to_vec();
        pool::shuffle(&mut cards, rng);
        Ok(Self {
            cards,
            index: 0,
            flipped: false,
        })
    }

    /// Resume at a previously saved position
    ///
    /// A position outside the deck (the catalog may have shrunk since it was
    /// saved) falls back to the first card.
    pub fn resume_at(&mut self, saved_index: usize) {
        self.index = if saved_index < self.cards.len() {
            saved_index
        } else {
            0
        };
        self.flipped = false;
    }

    /// Card currently shown
    #[inline]
    pub fn current(&self) -> &Question {
        &self.cards[self.index]
    }

    /// Flip between question and answer side
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    #[inline]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Move to the next card; `false` at the end of the deck
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.cards.len() {
            self.index += 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    /// Move to the previous card; `false` at the start of the deck
    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    /// Start the pass over from the first card
    pub fn restart(&mut self) {
        self.index = 0;
        self.flipped = false;
    }

    /// 1-based position and deck size
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.cards.len())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
