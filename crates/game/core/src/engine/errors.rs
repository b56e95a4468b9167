//! Errors surfaced by round lifecycle intents.

use crate::error::{ErrorSeverity, GameError};

/// Rejected round-start requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("a round is already in progress")]
    RoundInProgress,
}

impl GameError for RoundError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::RoundInProgress => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RoundInProgress => "ROUND_IN_PROGRESS",
        }
    }
}
