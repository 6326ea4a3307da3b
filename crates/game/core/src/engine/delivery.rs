//! The per-ball rule.

use crate::state::{InningNumber, Pick, Side};

/// Effect of one ball on the batting side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Delivery {
    /// Both hands matched: one wicket, no runs.
    Dismissal,
    /// Hands differed: the batter's own pick is added to the total.
    Runs(u32),
}

impl Delivery {
    /// Resolves a ball. The bowler's pick is only a comparator and never
    /// contributes runs.
    pub fn resolve(batting_pick: Pick, bowling_pick: Pick) -> Self {
        if batting_pick == bowling_pick {
            Delivery::Dismissal
        } else {
            Delivery::Runs(batting_pick.value())
        }
    }

    pub const fn runs(&self) -> u32 {
        match self {
            Delivery::Dismissal => 0,
            Delivery::Runs(runs) => *runs,
        }
    }

    pub const fn is_dismissal(&self) -> bool {
        matches!(self, Delivery::Dismissal)
    }
}

/// Everything a frontend needs to present one resolved ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BallOutcome {
    pub inning: InningNumber,
    pub batting_side: Side,
    pub batting_pick: Pick,
    pub bowling_pick: Pick,
    pub delivery: Delivery,

    /// Inning totals after this ball.
    pub runs: u32,
    pub wickets: u32,
    pub balls_remaining: u32,

    /// True when this ball closed the inning.
    pub inning_over: bool,
}
