//! Events published while a match is played.

use cricket_core::{BallOutcome, InningNumber, MatchConfig, MatchResult, Side, TossOutcome};
use serde::{Deserialize, Serialize};

/// Everything a frontend can observe about a match, in publication order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// The toss is decided and the match config is fixed.
    TossResolved {
        outcome: TossOutcome,
        config: MatchConfig,
    },

    /// One ball was resolved.
    BallResolved(BallOutcome),

    /// An inning closed.
    ///
    /// `target` is the chase target when the first inning closes and `None`
    /// for the second.
    InningClosed {
        inning: InningNumber,
        batting_side: Side,
        runs: u32,
        target: Option<u32>,
    },

    /// The result is frozen.
    MatchFinalized(MatchResult),
}

impl MatchEvent {
    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            MatchEvent::TossResolved { .. } => "toss_resolved",
            MatchEvent::BallResolved(_) => "ball_resolved",
            MatchEvent::InningClosed { .. } => "inning_closed",
            MatchEvent::MatchFinalized(_) => "match_finalized",
        }
    }
}
