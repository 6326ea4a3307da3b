use super::Side;
use crate::config::MatchConfig;

/// Which of the two innings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InningNumber {
    First,
    Second,
}

impl InningNumber {
    pub const fn as_u8(self) -> u8 {
        match self {
            InningNumber::First => 1,
            InningNumber::Second => 2,
        }
    }
}

impl core::fmt::Display for InningNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// One side's batting turn.
///
/// `is_over` is set by the engine after every ball and, once true, the inning
/// is frozen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InningState {
    pub number: InningNumber,
    pub batting_side: Side,
    pub runs: u32,
    pub wickets: u32,
    pub balls_remaining: u32,
    pub is_over: bool,
}

impl InningState {
    pub fn new(number: InningNumber, batting_side: Side, balls: u32) -> Self {
        Self {
            number,
            batting_side,
            runs: 0,
            wickets: 0,
            balls_remaining: balls,
            is_over: false,
        }
    }

    pub fn bowling_side(&self) -> Side {
        self.batting_side.other()
    }

    pub fn balls_bowled(&self, config: &MatchConfig) -> u32 {
        config.balls_per_inning().saturating_sub(self.balls_remaining)
    }

    /// Overs bowled in scoreboard notation, e.g. `0.1/1` or `2.4/5`.
    pub fn overs_display(&self, config: &MatchConfig) -> String {
        let bowled = self.balls_bowled(config);
        format!(
            "{}.{}/{}",
            bowled / MatchConfig::BALLS_PER_OVER,
            bowled % MatchConfig::BALLS_PER_OVER,
            config.overs
        )
    }

    /// Evaluates the closing rule against the current counters.
    ///
    /// `target` is only consulted for the second inning.
    pub(crate) fn should_close(&self, wickets_limit: u32, target: Option<u32>) -> bool {
        let chased = match (self.number, target) {
            (InningNumber::Second, Some(target)) => self.runs >= target,
            _ => false,
        };
        self.balls_remaining == 0 || self.wickets >= wickets_limit || chased
    }
}
