use thiserror::Error;

use crate::domain::Year;

/// Validation and lookup failures raised by the season store. Nothing here
/// is fatal: every variant maps to a caller-visible outcome and a rejected
/// write leaves the document untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("course name must not be empty")]
    MissingCourse,

    #[error("at least one player needs a score")]
    NoScores,

    #[error("only {participants} of the required {required} players scored; explicit confirmation needed")]
    NeedsConfirmation {
        participants: usize,
        required: usize,
    },

    #[error("player '{0}' is not on the roster")]
    UnknownPlayer(String),

    #[error("no rounds recorded for {0}")]
    SeasonNotFound(Year),

    #[error("round {number} does not exist in {year}")]
    RoundNotFound { year: Year, number: u32 },

    #[error("cup name must not be empty")]
    EmptyCupName,
}
