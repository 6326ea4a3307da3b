//! Deterministic hand cricket rules shared across frontends.
//!
//! `cricket-core` defines the canonical match rules (toss, per-ball resolution,
//! two-innings lifecycle) and exposes pure APIs that the runtime and any
//! frontend can drive. All match state mutation flows through
//! [`engine::MatchEngine`]; the pre-match toss flows through
//! [`toss::TossResolver`]. Randomness is never sourced internally: callers
//! inject an [`env::RngOracle`].
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod toss;

pub use config::{MatchConfig, MatchMode};
pub use engine::{BallOutcome, Delivery, MatchEngine, MatchError, MatchResult, ResultType};
pub use env::{PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, GameError, InvalidInput};
pub use state::{InningNumber, InningState, MatchPhase, MatchState, Pick, Side};
pub use toss::{
    BatBowlDecision, TossChoice, TossDraw, TossError, TossOutcome, TossResolver, TossStage,
};
