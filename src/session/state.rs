//! Session state structures
//!
//! All mutable quiz state lives in one owned value, transitioned only by the
//! operations on [`crate::session::QuizSession`]. The per-question fields sit
//! in their own sub-record so advancing (or swapping) resets them wholesale
//! and nothing can leak into the next question.

use smallvec::SmallVec;

use crate::scoring::TIMER_SECONDS;

/// State scoped to the question currently on screen
///
/// Replaced with a fresh value on `next()` and `use_swap()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionScope {
    /// Seconds left on the clock
    pub time_left: u32,
    /// Option the player locked in; `None` until answered (or on timeout)
    pub selected_option: Option<usize>,
    /// Whether the answer has been revealed; pauses the timer
    pub revealed: bool,
    /// Option indices removed by the 50/50 lifeline (at most 2)
    pub hidden_options: SmallVec<[usize; 2]>,
    /// Whether the hint lifeline was taken for this question
    pub hint_used: bool,
}

impl QuestionScope {
    /// Scope for a question that has just come up
    #[inline]
    pub fn fresh() -> Self {
        Self {
            time_left: TIMER_SECONDS,
            selected_option: None,
            revealed: false,
            hidden_options: SmallVec::new(),
            hint_used: false,
        }
    }
}

impl Default for QuestionScope {
    fn default() -> Self {
        Self::fresh()
    }
}

/// Mutable state of one quiz attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Index of the question being played
    pub current_index: usize,
    /// Running score; penalties may push it negative
    pub score: i32,
    /// Consecutive correct answers; resets to 0 on any miss
    pub streak: u32,
    /// Per-question state
    pub scope: QuestionScope,
}

impl SessionState {
    /// State at the start of a session
    #[inline]
    pub fn new() -> Self {
        Self {
            current_index: 0,
            score: 0,
            streak: 0,
            scope: QuestionScope::fresh(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Answer taken for one question, appended exactly once per question
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    /// Id of the question as played (post-swap)
    pub question_id: String,
    /// Locked-in option; `None` records a timeout
    pub selected: Option<usize>,
    pub correct: bool,
}

impl AnswerRecord {
    /// Whether this record came from the timer running out
    #[inline]
    pub fn timed_out(&self) -> bool {
        self.selected.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_fresh_scope() {
        let scope = QuestionScope::fresh();
        assert_eq!(scope.time_left, TIMER_SECONDS);
        assert_eq!(scope.selected_option, None);
        assert!(!scope.revealed);
        assert!(scope.hidden_options.is_empty());
        assert!(!scope.hint_used);
    }

    #[test]
    fn test_scope_reset_clears_question_state() {
        let mut scope = QuestionScope::fresh();
        scope.time_left = 3;
        scope.selected_option = Some(2);
        scope.revealed = true;
        scope.hidden_options = smallvec![1, 3];
        scope.hint_used = true;

        scope = QuestionScope::fresh();
        assert_eq!(scope, QuestionScope::default());
    }

    #[test]
    fn test_new_session_state() {
        let state = SessionState::new();
        assert_eq!(state.current_index, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.streak, 0);
        assert_eq!(state.scope, QuestionScope::fresh());
    }

    #[test]
    fn test_timeout_record() {
        let record = AnswerRecord {
            question_id: "q1".to_string(),
            selected: None,
            correct: false,
        };
        assert!(record.timed_out());
        assert!(!record.correct);
    }
}
