//! Scripture Quiz Core - Bible trivia quiz session engine
//!
//! This crate is the rules engine behind a Bible trivia app: question
//! sampling, the timed quiz state machine with streak scoring and lifelines,
//! result summaries, the leaderboard table, and a flashcard study deck.
//! The frontend owns rendering, the wall clock (calling
//! [`QuizSession::tick`](session::QuizSession::tick) once per second), and
//! durable storage; the engine owns every rule.

pub mod catalog;
pub mod error;
pub mod leaderboard;
pub mod pool;
pub mod scoring;
pub mod session;
pub mod study;

use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;

use crate::catalog::{CategoryFilter, Question, QuestionCatalog};
use crate::error::{QuizError, Result};
use crate::scoring::GAME_LENGTH;
use crate::session::QuizSession;
use crate::study::StudyDeck;

// ============================================================================
// Cached Catalog
// ============================================================================

/// Global cached question catalog
///
/// The question bank changes rarely and is read by every session, so it is
/// cached process-wide once at startup instead of being threaded through
/// every call. `init_catalog` may be called again to swap in fresh data.
static CACHED_CATALOG: OnceCell<RwLock<Arc<QuestionCatalog>>> = OnceCell::new();

/// Initialize (or replace) the cached question catalog
pub fn init_catalog(questions: Vec<Question>) {
    install_catalog(Arc::new(QuestionCatalog::new(questions)));
}

/// Initialize the cached catalog from its JSON wire form
pub fn init_catalog_json(json: &str) -> Result<()> {
    install_catalog(Arc::new(QuestionCatalog::from_json(json)?));
    Ok(())
}

fn install_catalog(catalog: Arc<QuestionCatalog>) {
    log::debug!("catalog initialized: {} questions", catalog.len());

    if let Some(existing) = CACHED_CATALOG.get() {
        let mut guard = existing.write();
        *guard = catalog;
    } else {
        let _ = CACHED_CATALOG.set(RwLock::new(catalog));
    }
}

/// Check whether a catalog has been initialized
pub fn is_catalog_initialized() -> bool {
    CACHED_CATALOG.get().is_some()
}

/// Handle to the cached catalog
pub fn shared_catalog() -> Result<Arc<QuestionCatalog>> {
    CACHED_CATALOG
        .get()
        .map(|lock| lock.read().clone())
        .ok_or(QuizError::CatalogNotInitialized)
}

// ============================================================================
// Convenience Entry Points
// ============================================================================

/// Start a quiz session against the cached catalog
///
/// `category` accepts the `All` sentinel for an unfiltered game; the session
/// holds the standard [`GAME_LENGTH`] questions, fewer when the filtered
/// pool runs short.
///
/// # Errors
/// [`QuizError::CatalogNotInitialized`] before `init_catalog`, or
/// [`QuizError::EmptyPool`] when the filter matches nothing.
pub fn start_session(category: &str) -> Result<QuizSession> {
    let catalog = shared_catalog()?;
    QuizSession::start(
        catalog,
        CategoryFilter::parse(category),
        GAME_LENGTH,
        &mut rand::thread_rng(),
    )
}

/// Start a flashcard pass over the whole cached catalog
pub fn start_study_deck() -> Result<StudyDeck> {
    let catalog = shared_catalog()?;
    StudyDeck::new(&catalog, &mut rand::thread_rng())
}
