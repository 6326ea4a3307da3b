//! Authoritative match state representation.
//!
//! This module owns the data structures that describe sides, picks, innings
//! and the match as a whole. Runtime layers clone or query this state but
//! mutate it exclusively through [`crate::engine::MatchEngine`].
mod inning;
mod pick;
mod side;

pub use inning::{InningNumber, InningState};
pub use pick::Pick;
pub use side::Side;

use crate::config::MatchConfig;
use crate::engine::MatchResult;

/// Lifecycle phase of a match.
///
/// Phases only ever move forward:
/// `AwaitingBall1 → Inning1Over → AwaitingBall2 → Inning2Over → Finalized`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPhase {
    /// First inning in progress.
    #[strum(serialize = "awaiting ball in inning 1")]
    AwaitingBall1,
    /// First inning closed; the target may or may not be computed yet.
    #[strum(serialize = "inning 1 over")]
    Inning1Over,
    /// Second inning (the chase) in progress.
    #[strum(serialize = "awaiting ball in inning 2")]
    AwaitingBall2,
    /// Second inning closed; the result has not been read yet.
    #[strum(serialize = "inning 2 over")]
    Inning2Over,
    /// Terminal phase.
    #[strum(serialize = "finalized")]
    Finalized,
}

impl MatchPhase {
    /// Returns true while a ball can be bowled.
    pub const fn accepts_ball(&self) -> bool {
        matches!(self, Self::AwaitingBall1 | Self::AwaitingBall2)
    }
}

/// Canonical snapshot of the deterministic match state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    /// Immutable match settings.
    pub config: MatchConfig,

    /// RNG seed for the autonomous side's picks.
    ///
    /// Set once at match creation and never modified. Combined with `nonce`
    /// to derive a unique seed for each ball.
    pub match_seed: u64,

    /// Balls bowled so far across both innings.
    pub nonce: u64,

    pub phase: MatchPhase,

    pub first: InningState,
    pub second: Option<InningState>,

    /// Runs the chasing side must reach. `None` until inning 1 is closed.
    pub target: Option<u32>,

    /// Frozen result, present once the match is finalized.
    pub result: Option<MatchResult>,
}

impl MatchState {
    /// Creates the state for a fresh match with inning 1 ready to start.
    pub fn new(config: MatchConfig, match_seed: u64) -> Self {
        let first = InningState::new(
            InningNumber::First,
            config.batting_first,
            config.balls_per_inning(),
        );

        Self {
            config,
            match_seed,
            nonce: 0,
            phase: MatchPhase::AwaitingBall1,
            first,
            second: None,
            target: None,
            result: None,
        }
    }

    /// The inning currently being played (or last played).
    pub fn current_inning(&self) -> &InningState {
        self.second.as_ref().unwrap_or(&self.first)
    }

    pub(crate) fn current_inning_mut(&mut self) -> &mut InningState {
        match self.second.as_mut() {
            Some(second) => second,
            None => &mut self.first,
        }
    }

    /// Runs the chasing side still needs, while the chase is live.
    pub fn runs_needed(&self) -> Option<u32> {
        let target = self.target?;
        let second = self.second.as_ref()?;
        Some(target.saturating_sub(second.runs))
    }
}
