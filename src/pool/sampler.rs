//! Sampling primitives over the question catalog
//!
//! Every random draw in the engine funnels through this module, and every
//! function takes the random source as a parameter so tests can seed it.

use ahash::AHashSet;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::catalog::{CategoryFilter, Question, QuestionCatalog};
use crate::error::{QuizError, Result};

/// Maximum options removed by the 50/50 lifeline
pub const FIFTY_FIFTY_HIDDEN: usize = 2;

/// Uniform in-place permutation (Fisher–Yates)
#[inline]
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Draw up to `count` distinct questions matching `filter`
///
/// The filtered pool is shuffled uniformly and truncated, so a short pool
/// comes back whole, in random order, with no padding and no repeats.
/// Returns [`QuizError::EmptyPool`] when nothing matches the filter.
pub fn sample_questions<R: Rng>(
    catalog: &QuestionCatalog,
    filter: &CategoryFilter,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Question>> {
    let mut pool: Vec<Question> = catalog
        .iter()
        .filter(|q| filter.matches(q))
        .cloned()
        .collect();

    if pool.is_empty() {
        return Err(QuizError::EmptyPool(filter.to_string()));
    }

    shuffle(&mut pool, rng);
    pool.truncate(count);
    Ok(pool)
}

/// Pick the option indices the 50/50 lifeline hides
///
/// Never includes the correct index; hides min(2, wrong options).
pub fn pick_hidden_options<R: Rng>(question: &Question, rng: &mut R) -> SmallVec<[usize; 2]> {
    let mut wrong: SmallVec<[usize; 4]> = (0..question.options.len())
        .filter(|&idx| !question.is_correct(idx))
        .collect();

    shuffle(&mut wrong, rng);
    wrong.truncate(FIFTY_FIFTY_HIDDEN);
    wrong.into_iter().collect()
}

/// Pick a uniformly random replacement for the swap lifeline
///
/// Candidates match `filter` and carry an id outside `active_ids`; `None`
/// means the pool is exhausted and the swap must be rejected.
pub fn swap_candidate<R: Rng>(
    catalog: &QuestionCatalog,
    filter: &CategoryFilter,
    active_ids: &AHashSet<&str>,
    rng: &mut R,
) -> Option<Question> {
    let pool: Vec<&Question> = catalog
        .iter()
        .filter(|q| filter.matches(q) && !active_ids.contains(q.id.as_str()))
        .collect();

    pool.choose(rng).map(|&q| q.clone())
}
