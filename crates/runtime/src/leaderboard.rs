//! Match history records and per-player standings.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use cricket_core::{MatchMode, MatchResult, ResultType, Side};
use serde::{Deserialize, Serialize};

use crate::settings::PlayerNames;

/// One finalized match as stored in the leaderboard.
///
/// Player 1 is always side A, and `result` is reported from player 1's
/// perspective like [`MatchResult::result_type`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub played_at: DateTime<Utc>,
    pub mode: MatchMode,
    pub player1: String,
    pub player2: String,
    pub player1_runs: u32,
    pub player2_runs: u32,
    pub batting_first: Side,
    pub result: ResultType,
    pub margin: u32,
}

impl MatchRecord {
    pub fn from_result(
        result: &MatchResult,
        mode: MatchMode,
        names: &PlayerNames,
        played_at: DateTime<Utc>,
    ) -> Self {
        Self {
            played_at,
            mode,
            player1: names.player1.clone(),
            player2: names.player2.clone(),
            player1_runs: result.runs_for(Side::A),
            player2_runs: result.runs_for(Side::B),
            batting_first: result.batting_first,
            result: result.result_for(Side::A),
            margin: result.win_margin,
        }
    }

    pub fn winner_name(&self) -> Option<&str> {
        match self.result {
            ResultType::Victory => Some(self.player1.as_str()),
            ResultType::Lose => Some(self.player2.as_str()),
            ResultType::Draw => None,
        }
    }

    /// Result line such as `You beat Computer by 4 runs`.
    pub fn summary(&self) -> String {
        match self.result {
            ResultType::Victory => format!(
                "{} beat {} by {}",
                self.player1,
                self.player2,
                runs_label(self.margin)
            ),
            ResultType::Lose => format!(
                "{} beat {} by {}",
                self.player2,
                self.player1,
                runs_label(self.margin)
            ),
            ResultType::Draw => format!("{} and {} drew", self.player1, self.player2),
        }
    }

    fn entries(&self) -> [(&str, ResultType); 2] {
        let opponent = match self.result {
            ResultType::Victory => ResultType::Lose,
            ResultType::Lose => ResultType::Victory,
            ResultType::Draw => ResultType::Draw,
        };
        [
            (self.player1.as_str(), self.result),
            (self.player2.as_str(), opponent),
        ]
    }
}

fn runs_label(runs: u32) -> String {
    if runs == 1 {
        "1 run".to_owned()
    } else {
        format!("{runs} runs")
    }
}

/// Aggregated record of one player across the history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
    /// Largest winning margin, 0 if the player never won.
    pub best_margin: u32,
}

impl Standing {
    fn new(player: &str) -> Self {
        Self {
            player: player.to_owned(),
            ..Self::default()
        }
    }

    fn record(&mut self, result: ResultType, margin: u32) {
        self.played += 1;
        match result {
            ResultType::Victory => {
                self.won += 1;
                self.best_margin = self.best_margin.max(margin);
            }
            ResultType::Lose => self.lost += 1,
            ResultType::Draw => self.drawn += 1,
        }
    }
}

/// Computes standings for every player named in `records`.
///
/// Ordered by wins, then draws, then fewest losses, then name.
pub fn standings(records: &[MatchRecord]) -> Vec<Standing> {
    let mut by_player: BTreeMap<&str, Standing> = BTreeMap::new();
    for record in records {
        for (player, result) in record.entries() {
            by_player
                .entry(player)
                .or_insert_with(|| Standing::new(player))
                .record(result, record.margin);
        }
    }

    let mut standings: Vec<Standing> = by_player.into_values().collect();
    standings.sort_by(|a, b| {
        b.won
            .cmp(&a.won)
            .then(b.drawn.cmp(&a.drawn))
            .then(a.lost.cmp(&b.lost))
            .then_with(|| a.player.cmp(&b.player))
    });
    standings
}
