//! Error types for the quiz session core engine

use thiserror::Error;

/// Main error type for the quiz session core engine
///
/// Every engine-detected failure is returned as a value. The recoverable
/// variants (`InsufficientScore`, `LifelineAlreadyUsed`, `NoSwapCandidate`)
/// leave the session untouched; only `EmptyPool` prevents a session from
/// existing at all.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("no questions available for category `{0}`")]
    EmptyPool(String),

    #[error("not enough points: need {cost}, have {score}")]
    InsufficientScore { cost: i32, score: i32 },

    #[error("lifeline already used for this question")]
    LifelineAlreadyUsed,

    #[error("no replacement question available")]
    NoSwapCandidate,

    #[error("answer already revealed for this question")]
    AnswerRevealed,

    #[error("current question has not been answered yet")]
    AnswerPending,

    #[error("quiz session already completed")]
    SessionCompleted,

    #[error("quiz session still in progress")]
    NotCompleted,

    #[error("score already submitted for this session")]
    ScoreAlreadySubmitted,

    #[error("player name must not be blank")]
    EmptyPlayerName,

    #[error("invalid question: {0}")]
    InvalidQuestion(String),

    #[error("invalid catalog data: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    #[error("question catalog not initialized, call init_catalog() first")]
    CatalogNotInitialized,
}

/// Result type alias for the quiz session core engine
pub type Result<T> = std::result::Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = QuizError::EmptyPool("Prophecy".to_string());
        assert_eq!(
            err.to_string(),
            "no questions available for category `Prophecy`"
        );

        let err = QuizError::InsufficientScore { cost: 50, score: 25 };
        assert_eq!(err.to_string(), "not enough points: need 50, have 25");
    }
}
