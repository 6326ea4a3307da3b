//! Player names and last chosen match settings.
//!
//! Values live in a [`SettingsRepository`] under fixed string keys and are
//! handed to the session as plain values; nothing reads them implicitly.

use cricket_core::{MatchConfig, MatchMode, Side};
use serde::{Deserialize, Serialize};

use crate::repository::{Result, SettingsRepository};

pub const PLAYER1_NAME_KEY: &str = "player1Name";
pub const PLAYER2_NAME_KEY: &str = "player2Name";
pub const SELECTED_OVERS_KEY: &str = "selectedOvers";
pub const SELECTED_WICKETS_KEY: &str = "selectedWickets";

/// Display names for side A (player 1) and side B (player 2).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    pub player1: String,
    pub player2: String,
}

impl PlayerNames {
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
        }
    }

    /// "You"/"Computer" against the computer, "Player 1"/"Player 2" otherwise.
    pub fn defaults_for(mode: MatchMode) -> Self {
        match mode {
            MatchMode::SinglePlayer => Self::new("You", "Computer"),
            MatchMode::LocalTwoPlayer => Self::new("Player 1", "Player 2"),
        }
    }

    pub fn name_of(&self, side: Side) -> &str {
        match side {
            Side::A => &self.player1,
            Side::B => &self.player2,
        }
    }
}

/// Everything a session needs besides the toss.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSettings {
    pub names: PlayerNames,
    pub overs: u32,
    pub wickets: u32,
}

impl PlayerSettings {
    pub fn defaults_for(mode: MatchMode) -> Self {
        Self {
            names: PlayerNames::defaults_for(mode),
            overs: MatchConfig::DEFAULT_OVERS,
            wickets: MatchConfig::DEFAULT_WICKETS,
        }
    }

    /// Loads stored values, falling back to the mode defaults for anything
    /// missing, blank or unparsable.
    ///
    /// In single-player mode player 2 is always the computer, so a stored
    /// player 2 name is only used for two-player matches.
    pub fn load(repo: &dyn SettingsRepository, mode: MatchMode) -> Result<Self> {
        let mut settings = Self::defaults_for(mode);

        if let Some(name) = non_blank(repo.get(PLAYER1_NAME_KEY)?) {
            settings.names.player1 = name;
        }
        if mode == MatchMode::LocalTwoPlayer
            && let Some(name) = non_blank(repo.get(PLAYER2_NAME_KEY)?)
        {
            settings.names.player2 = name;
        }
        if let Some(overs) = parse_positive(repo.get(SELECTED_OVERS_KEY)?) {
            settings.overs = overs;
        }
        if let Some(wickets) = parse_positive(repo.get(SELECTED_WICKETS_KEY)?) {
            settings.wickets = wickets;
        }

        Ok(settings)
    }

    /// Stores the chosen overs and wickets.
    pub fn save_selection(&self, repo: &dyn SettingsRepository) -> Result<()> {
        repo.set(SELECTED_OVERS_KEY, &self.overs.to_string())?;
        repo.set(SELECTED_WICKETS_KEY, &self.wickets.to_string())?;
        tracing::debug!(
            overs = self.overs,
            wickets = self.wickets,
            "Saved match selection"
        );
        Ok(())
    }
}

/// Stores display names. Blank names are removed so the defaults apply again.
pub fn save_names(
    repo: &dyn SettingsRepository,
    player1: Option<&str>,
    player2: Option<&str>,
) -> Result<()> {
    for (key, name) in [(PLAYER1_NAME_KEY, player1), (PLAYER2_NAME_KEY, player2)] {
        match name.map(str::trim) {
            Some("") => repo.remove(key)?,
            Some(name) => repo.set(key, name)?,
            None => {}
        }
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_positive(value: Option<String>) -> Option<u32> {
    value?.trim().parse().ok().filter(|&n: &u32| n > 0)
}
