//! Result summary derived when a session completes

use serde::{Deserialize, Serialize};

use crate::catalog::Question;
use crate::session::AnswerRecord;

/// Read-only view over a finished attempt
///
/// Derived exactly once when the session reaches its terminal state; the
/// leaderboard submission payload is read from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    /// Questions answered correctly
    pub correct_count: usize,
    /// Questions played (equals the active sequence length)
    pub total: usize,
    /// Score at completion, lifeline costs and penalties included
    pub final_score: i32,
}

impl ResultSummary {
    /// Derive the summary from the frozen answer log
    pub fn derive(answers: &[AnswerRecord], final_score: i32) -> Self {
        Self {
            correct_count: answers.iter().filter(|a| a.correct).count(),
            total: answers.len(),
            final_score,
        }
    }

    /// Fraction of questions answered correctly, 0.0 for an empty log
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct_count as f64 / self.total as f64
        }
    }
}

/// One row of the post-quiz review: the question as played and the answer
/// taken for it, in play order.
#[derive(Debug, Clone, Copy)]
pub struct ReviewEntry<'a> {
    pub question: &'a Question,
    pub record: &'a AnswerRecord,
}

impl ReviewEntry<'_> {
    /// Text of the option the player picked, `None` on timeout
    pub fn selected_text(&self) -> Option<&str> {
        self.record
            .selected
            .and_then(|idx| self.question.options.get(idx))
            .map(String::as_str)
    }
}
