//! Unified error type surfaced by the match session.
//!
//! Wraps rule violations from `cricket-core` and storage failures so the
//! frontend can bubble them up with one `?`.
use cricket_core::{GameError, MatchError, MatchMode, TossError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("previous ball is still being presented")]
    InputPending,

    #[error("cannot {operation} while the toss is undecided")]
    TossPending { operation: &'static str },

    #[error("cannot {operation} once the match has started")]
    MatchStarted { operation: &'static str },

    #[error("{operation} is not available in {mode} mode")]
    ModeMismatch {
        operation: &'static str,
        mode: MatchMode,
    },

    #[error(transparent)]
    Toss(#[from] TossError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl SessionError {
    /// True when the error stems from user input that can simply be re-entered.
    pub fn is_retryable_input(&self) -> bool {
        match self {
            SessionError::InputPending => true,
            SessionError::Toss(err) => !err.severity().is_internal(),
            SessionError::Match(err) => !err.severity().is_internal(),
            _ => false,
        }
    }
}
