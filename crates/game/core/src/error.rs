//! Common error infrastructure for cricket-core.
//!
//! This module provides shared types and traits used across all error types in
//! cricket-core. Domain-specific errors (`TossError`, `MatchError`) are defined
//! in their respective modules alongside the state machines they guard.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each state machine has its own error type
//! - **Severity Classification**: Bad input is separated from sequencing bugs
//! - **Deterministic**: No I/O, no allocation-dependent messages

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: An operation was invoked out of sequence. A correct
///   orchestrator only exposes valid actions, so these indicate a caller bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: pick outside 1..=6, zero overs
    Validation,

    /// Internal error - the caller drove the state machine out of order.
    ///
    /// Examples: ball submitted after the inning closed, finalize mid-inning
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates a caller bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all cricket-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who is at fault, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, logging, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Rejected caller-supplied values.
///
/// Shared by the toss resolver and the match engine so both report the same
/// variant for the same mistake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidInput {
    #[error("pick {0} is outside the range 1..=6")]
    PickOutOfRange(u32),

    #[error("overs must be a positive integer")]
    ZeroOvers,

    #[error("{0} overs is more than a single inning can hold")]
    TooManyOvers(u32),

    #[error("wickets limit must be a positive integer")]
    ZeroWickets,
}

impl GameError for InvalidInput {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PickOutOfRange(_) => "PICK_OUT_OF_RANGE",
            Self::ZeroOvers => "ZERO_OVERS",
            Self::TooManyOvers(_) => "TOO_MANY_OVERS",
            Self::ZeroWickets => "ZERO_WICKETS",
        }
    }
}
