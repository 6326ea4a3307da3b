//! Terminal match result.

use crate::state::Side;

/// Outcome from one side's perspective.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResultType {
    Victory,
    Lose,
    Draw,
}

impl ResultType {
    fn compare(own: u32, opponent: u32) -> Self {
        match own.cmp(&opponent) {
            core::cmp::Ordering::Greater => ResultType::Victory,
            core::cmp::Ordering::Less => ResultType::Lose,
            core::cmp::Ordering::Equal => ResultType::Draw,
        }
    }
}

/// Frozen summary of a completed match.
///
/// `result_type` and `win_margin` are reported from the perspective of
/// `primary` (side A: the human in single-player, Player 1 in two-player).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub batting_first: Side,
    pub batting_first_runs: u32,
    pub batting_second_runs: u32,

    pub primary: Side,
    pub primary_runs: u32,
    pub opponent_runs: u32,

    pub result_type: ResultType,
    /// Absolute run difference between the two innings.
    pub win_margin: u32,
}

impl MatchResult {
    pub(crate) fn new(
        batting_first: Side,
        batting_first_runs: u32,
        batting_second_runs: u32,
        primary: Side,
    ) -> Self {
        let (primary_runs, opponent_runs) = if primary == batting_first {
            (batting_first_runs, batting_second_runs)
        } else {
            (batting_second_runs, batting_first_runs)
        };

        Self {
            batting_first,
            batting_first_runs,
            batting_second_runs,
            primary,
            primary_runs,
            opponent_runs,
            result_type: ResultType::compare(primary_runs, opponent_runs),
            win_margin: primary_runs.abs_diff(opponent_runs),
        }
    }

    /// Winning side, or `None` for a draw.
    pub fn winner(&self) -> Option<Side> {
        match self.result_type {
            ResultType::Victory => Some(self.primary),
            ResultType::Lose => Some(self.primary.other()),
            ResultType::Draw => None,
        }
    }

    /// Result as seen by `side`.
    pub fn result_for(&self, side: Side) -> ResultType {
        if side == self.primary {
            self.result_type
        } else {
            ResultType::compare(self.opponent_runs, self.primary_runs)
        }
    }

    pub fn runs_for(&self, side: Side) -> u32 {
        if side == self.primary {
            self.primary_runs
        } else {
            self.opponent_runs
        }
    }
}
