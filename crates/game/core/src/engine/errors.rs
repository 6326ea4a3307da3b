//! Error types for the match engine.

use crate::error::{ErrorSeverity, GameError, InvalidInput};
use crate::state::{InningNumber, MatchPhase};

/// Errors surfaced while driving a match through the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("inning {inning} is closed; no further balls are accepted")]
    InningClosed { inning: InningNumber },

    #[error("cannot {operation} while {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: MatchPhase,
    },

    #[error("inning {inning} is still in progress")]
    InningInProgress { inning: InningNumber },
}

impl MatchError {
    pub(crate) fn invalid_transition(operation: &'static str, phase: MatchPhase) -> Self {
        Self::InvalidTransition { operation, phase }
    }
}

impl GameError for MatchError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidInput(_) => ErrorSeverity::Validation,
            Self::InningClosed { .. }
            | Self::InvalidTransition { .. }
            | Self::InningInProgress { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(inner) => inner.error_code(),
            Self::InningClosed { .. } => "INNING_CLOSED",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::InningInProgress { .. } => "INNING_IN_PROGRESS",
        }
    }
}
