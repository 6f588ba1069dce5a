//! Quiz session state machine
//!
//! One [`QuizSession`] is one attempt: it owns the active question sequence,
//! the score/streak/timer state, and the answer log, and exposes the
//! operations that drive play. The caller supplies the clock (one `tick()`
//! per second while a question is unrevealed) and the random source; the
//! engine itself performs no I/O and never blocks.
//!
//! Every operation is atomic with respect to its own fields: an `Err` return
//! means nothing changed. Aborting an attempt is dropping the session value.

use std::sync::Arc;

use ahash::AHashSet;
use rand::Rng;

use crate::catalog::{CategoryFilter, Question, QuestionCatalog};
use crate::error::{QuizError, Result};
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::pool;
use crate::scoring::{self, Lifeline};
use crate::session::{AnswerRecord, QuestionScope, ResultSummary, ReviewEntry, SessionState};

/// Feedback returned when an answer is locked in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    /// Signed score delta this answer applied
    pub points: i32,
    /// Streak after the answer
    pub streak: u32,
}

/// Result of one clock tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Clock still running; seconds remaining
    Running(u32),
    /// Clock hit zero; the question was finalized as a timeout
    Expired(AnswerFeedback),
    /// Clock paused (answer revealed) or session over; nothing changed
    Paused,
}

/// Result of advancing past a revealed question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextOutcome {
    /// Play moved to the question at this index
    Question(usize),
    /// That was the last question; the session is terminal now
    Completed,
}

/// Stateful engine for a single quiz attempt
#[derive(Debug)]
pub struct QuizSession {
    catalog: Arc<QuestionCatalog>,
    category: CategoryFilter,
    questions: Vec<Question>,
    answers: Vec<AnswerRecord>,
    state: SessionState,
    summary: Option<ResultSummary>,
    score_submitted: bool,
}

impl QuizSession {
    /// Start a fresh attempt: sample the active sequence and reset all state
    ///
    /// Fails with [`QuizError::EmptyPool`] before any session exists when the
    /// filtered catalog is empty (or `length` is zero). A short pool yields a
    /// short session, never padding.
    pub fn start<R: Rng>(
        catalog: Arc<QuestionCatalog>,
        category: CategoryFilter,
        length: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let questions = pool::sample_questions(&catalog, &category, length, rng)?;
        if questions.is_empty() {
            return Err(QuizError::EmptyPool(category.to_string()));
        }

        log::debug!(
            "quiz started: {} questions, category `{}`",
            questions.len(),
            category
        );

        Ok(Self {
            catalog,
            category,
            questions,
            answers: Vec::new(),
            state: SessionState::new(),
            summary: None,
            score_submitted: false,
        })
    }

    // ------------------------------------------------------------------------
    // Clock
    // ------------------------------------------------------------------------

    /// Advance the clock by one second
    ///
    /// Ignored while the answer is revealed or the session is over, so a
    /// late-firing external timer can never double-finalize a question.
    /// Hitting zero finalizes the question as a timeout, exactly as a wrong
    /// answer would.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_completed() || self.state.scope.revealed {
            return TickOutcome::Paused;
        }

        self.state.scope.time_left = self.state.scope.time_left.saturating_sub(1);
        if self.state.scope.time_left == 0 {
            log::debug!("question {} timed out", self.state.current_index);
            TickOutcome::Expired(self.finalize(None))
        } else {
            TickOutcome::Running(self.state.scope.time_left)
        }
    }

    // ------------------------------------------------------------------------
    // Answering
    // ------------------------------------------------------------------------

    /// Lock in an answer for the current question
    ///
    /// Returns `None` without touching any state when the answer is already
    /// revealed (double answers must not double-score) or the session is
    /// over. Any index other than the correct one scores as incorrect.
    pub fn answer(&mut self, index: usize) -> Option<AnswerFeedback> {
        if self.is_completed() || self.state.scope.revealed {
            return None;
        }
        Some(self.finalize(Some(index)))
    }

    /// Apply the scoring policy and reveal; `None` selection is a timeout
    fn finalize(&mut self, selected: Option<usize>) -> AnswerFeedback {
        let question = &self.questions[self.state.current_index];
        let correct = selected.is_some_and(|idx| question.is_correct(idx));

        self.state.scope.selected_option = selected;
        self.state.scope.revealed = true;

        // The multiplier is decided by the streak this answer produces.
        let points = if correct {
            let awarded = scoring::correct_points(self.state.streak);
            self.state.streak += 1;
            awarded
        } else {
            self.state.streak = 0;
            scoring::incorrect_points()
        };
        self.state.score += points;

        AnswerFeedback {
            correct,
            points,
            streak: self.state.streak,
        }
    }

    /// Advance past a revealed question, recording its answer
    ///
    /// Appends exactly one [`AnswerRecord`] per question. On the last
    /// question the log freezes and the summary is derived; afterwards only
    /// read access and score submission remain valid.
    pub fn next(&mut self) -> Result<NextOutcome> {
        if self.is_completed() {
            return Err(QuizError::SessionCompleted);
        }
        if !self.state.scope.revealed {
            return Err(QuizError::AnswerPending);
        }

        let question = &self.questions[self.state.current_index];
        let selected = self.state.scope.selected_option;
        self.answers.push(AnswerRecord {
            question_id: question.id.clone(),
            selected,
            correct: selected.is_some_and(|idx| question.is_correct(idx)),
        });

        if self.state.current_index + 1 < self.questions.len() {
            self.state.current_index += 1;
            self.state.scope = QuestionScope::fresh();
            Ok(NextOutcome::Question(self.state.current_index))
        } else {
            self.summary = Some(ResultSummary::derive(&self.answers, self.state.score));
            log::debug!(
                "quiz completed: {}/{} correct, score {}",
                self.answers.iter().filter(|a| a.correct).count(),
                self.answers.len(),
                self.state.score
            );
            Ok(NextOutcome::Completed)
        }
    }

    // ------------------------------------------------------------------------
    // Lifelines
    // ------------------------------------------------------------------------

    /// 50/50: hide two wrong options (fewer if the question has fewer)
    ///
    /// Once per question; charged up front against the current score.
    pub fn use_fifty_fifty<R: Rng>(&mut self, rng: &mut R) -> Result<&[usize]> {
        self.ensure_lifeline_window()?;
        if !self.state.scope.hidden_options.is_empty() {
            return Err(QuizError::LifelineAlreadyUsed);
        }
        let cost = self.ensure_affordable(Lifeline::FiftyFifty)?;

        let hidden = pool::pick_hidden_options(&self.questions[self.state.current_index], rng);
        self.state.score -= cost;
        self.state.scope.hidden_options = hidden;

        log::debug!(
            "50/50 on question {}: hiding {:?}",
            self.state.current_index,
            self.state.scope.hidden_options
        );
        Ok(&self.state.scope.hidden_options)
    }

    /// Hint: expose the scripture reference for the current question
    pub fn use_hint(&mut self) -> Result<&str> {
        self.ensure_lifeline_window()?;
        if self.state.scope.hint_used {
            return Err(QuizError::LifelineAlreadyUsed);
        }
        let cost = self.ensure_affordable(Lifeline::Hint)?;

        self.state.score -= cost;
        self.state.scope.hint_used = true;
        Ok(&self.questions[self.state.current_index].reference)
    }

    /// Swap: replace the current question with an unused one from the pool
    ///
    /// The replacement matches the active category filter and carries an id
    /// not already in the sequence; timer, hidden options and hint state
    /// reset for the new question. Rejected without any state change when
    /// unaffordable or when the pool has no eligible question left.
    pub fn use_swap<R: Rng>(&mut self, rng: &mut R) -> Result<&Question> {
        self.ensure_lifeline_window()?;
        let cost = self.ensure_affordable(Lifeline::Swap)?;

        let active_ids: AHashSet<&str> = self.questions.iter().map(|q| q.id.as_str()).collect();
        let replacement = pool::swap_candidate(&self.catalog, &self.category, &active_ids, rng)
            .ok_or(QuizError::NoSwapCandidate)?;

        log::debug!(
            "swap on question {}: {} -> {}",
            self.state.current_index,
            self.questions[self.state.current_index].id,
            replacement.id
        );

        self.state.score -= cost;
        self.questions[self.state.current_index] = replacement;
        self.state.scope = QuestionScope::fresh();
        Ok(&self.questions[self.state.current_index])
    }

    fn ensure_lifeline_window(&self) -> Result<()> {
        if self.is_completed() {
            return Err(QuizError::SessionCompleted);
        }
        if self.state.scope.revealed {
            return Err(QuizError::AnswerRevealed);
        }
        Ok(())
    }

    /// Check affordability against the score at invocation time
    fn ensure_affordable(&self, lifeline: Lifeline) -> Result<i32> {
        let cost = lifeline.cost();
        if self.state.score < cost {
            log::warn!(
                "{} rejected: need {} points, have {}",
                lifeline.label(),
                cost,
                self.state.score
            );
            return Err(QuizError::InsufficientScore {
                cost,
                score: self.state.score,
            });
        }
        Ok(cost)
    }

    // ------------------------------------------------------------------------
    // Completion
    // ------------------------------------------------------------------------

    /// Hand the final score to the leaderboard, once per session
    ///
    /// The created entry is returned even when its score immediately falls
    /// off the retained top list.
    pub fn submit_score(
        &mut self,
        name: &str,
        leaderboard: &mut Leaderboard,
    ) -> Result<LeaderboardEntry> {
        let summary = self.summary.as_ref().ok_or(QuizError::NotCompleted)?;
        if self.score_submitted {
            return Err(QuizError::ScoreAlreadySubmitted);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(QuizError::EmptyPlayerName);
        }

        let entry = leaderboard.append(name, summary.final_score);
        self.score_submitted = true;
        Ok(entry)
    }

    /// Per-question review rows, in play order; completed sessions only
    pub fn review(&self) -> Result<Vec<ReviewEntry<'_>>> {
        if !self.is_completed() {
            return Err(QuizError::NotCompleted);
        }
        Ok(self
            .questions
            .iter()
            .zip(&self.answers)
            .map(|(question, record)| ReviewEntry { question, record })
            .collect())
    }

    // ------------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------------

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.summary.is_some()
    }

    /// Summary, available once the session is completed
    #[inline]
    pub fn summary(&self) -> Option<&ResultSummary> {
        self.summary.as_ref()
    }

    /// Question currently on screen; `None` once completed
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_completed() {
            None
        } else {
            self.questions.get(self.state.current_index)
        }
    }

    /// The active sequence as played (reflects swaps)
    #[inline]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[inline]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// 1-based position and total, for progress display
    pub fn progress(&self) -> (usize, usize) {
        (self.state.current_index + 1, self.questions.len())
    }

    #[inline]
    pub fn score(&self) -> i32 {
        self.state.score
    }

    #[inline]
    pub fn streak(&self) -> u32 {
        self.state.streak
    }

    /// Multiplier the current streak has earned (display value)
    pub fn streak_multiplier(&self) -> f64 {
        scoring::streak_multiplier(self.state.streak)
    }

    #[inline]
    pub fn time_left(&self) -> u32 {
        self.state.scope.time_left
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.state.scope.revealed
    }

    #[inline]
    pub fn selected_option(&self) -> Option<usize> {
        self.state.scope.selected_option
    }

    /// Options removed by the 50/50 lifeline for the current question
    #[inline]
    pub fn hidden_options(&self) -> &[usize] {
        &self.state.scope.hidden_options
    }

    #[inline]
    pub fn hint_used(&self) -> bool {
        self.state.scope.hint_used
    }

    #[inline]
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Answer log so far (frozen at completion)
    #[inline]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[inline]
    pub fn score_submitted(&self) -> bool {
        self.score_submitted
    }
}
