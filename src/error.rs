use thiserror::Error;

/// Errors returned when a quiz operation is invoked in a state that does not allow it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuizError {
    #[error("no operator has been chosen for the current question")]
    NotAttempted,
    #[error("quiz already finished")]
    Finished,
    #[error("deck has no question at index {0}")]
    NoQuestion(usize),
}

/// Errors emitted while loading a deck.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck has no questions")]
    Empty,
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("unsupported deck format: {0}")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
