//! Error types for the toss procedure.

use crate::error::{ErrorSeverity, GameError, InvalidInput};

/// Errors surfaced while resolving the toss.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TossError {
    #[error("invalid toss input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("cannot {operation} while the toss is {stage}")]
    InvalidTransition {
        operation: &'static str,
        stage: &'static str,
    },

    #[error("side {winner} won the toss; its decision must be supplied")]
    DecisionNotAutonomous { winner: crate::state::Side },
}

impl TossError {
    pub(crate) fn invalid_transition(operation: &'static str, stage: &'static str) -> Self {
        Self::InvalidTransition { operation, stage }
    }
}

impl GameError for TossError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidInput(_) => ErrorSeverity::Validation,
            Self::InvalidTransition { .. } | Self::DecisionNotAutonomous { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(inner) => inner.error_code(),
            Self::InvalidTransition { .. } => "TOSS_INVALID_TRANSITION",
            Self::DecisionNotAutonomous { .. } => "TOSS_DECISION_NOT_AUTONOMOUS",
        }
    }
}
