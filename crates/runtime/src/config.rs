//! Runtime configuration and storage wiring.
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::repository::{
    FileLeaderboardRepository, FileSettingsRepository, InMemoryLeaderboardRepo,
    InMemorySettingsRepo, LeaderboardRepository, Result, SettingsRepository,
};

/// Settings shared by the session and its repositories.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Directory holding `settings.json` and `leaderboard.jsonl`.
    pub data_dir: PathBuf,
    /// Seed for the first match; later matches derive theirs from it.
    pub seed: u64,
    /// Write settings and results to `data_dir` (otherwise kept in memory).
    pub persistence: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            seed: rand::random(),
            persistence: true,
        }
    }
}

impl RuntimeConfig {
    /// Construct runtime configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HAND_CRICKET_DATA_DIR` - Save directory (default: platform data dir)
    /// - `HAND_CRICKET_SEED` - Fixed match seed (default: random)
    /// - `HAND_CRICKET_PERSISTENCE` - Persist to disk (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("HAND_CRICKET_DATA_DIR").filter(|v| !v.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(seed) = read_env::<u64>("HAND_CRICKET_SEED") {
            config.seed = seed;
        }
        if let Some(persistence) = read_env::<bool>("HAND_CRICKET_PERSISTENCE") {
            config.persistence = persistence;
        }

        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Open the settings store selected by this config.
    pub fn settings_repository(&self) -> Result<Arc<dyn SettingsRepository>> {
        if self.persistence {
            Ok(Arc::new(FileSettingsRepository::new(&self.data_dir)?))
        } else {
            Ok(Arc::new(InMemorySettingsRepo::new()))
        }
    }

    /// Open the leaderboard store selected by this config.
    pub fn leaderboard_repository(&self) -> Result<Arc<dyn LeaderboardRepository>> {
        if self.persistence {
            Ok(Arc::new(FileLeaderboardRepository::new(&self.data_dir)?))
        } else {
            Ok(Arc::new(InMemoryLeaderboardRepo::new()))
        }
    }
}

/// Platform data directory for hand-cricket
///
/// - macOS: `~/Library/Application Support/hand-cricket`
/// - Linux: `~/.local/share/hand-cricket` (or `$XDG_DATA_HOME/hand-cricket`)
/// - Windows: `%APPDATA%\hand-cricket`
/// - Fallback: `./save_data`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hand-cricket")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_when_persistence_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let config = RuntimeConfig {
            data_dir: dir.path().join("unused"),
            seed: 1,
            persistence: false,
        };

        let settings = config.settings_repository().unwrap();
        settings.set("player1Name", "Asha").unwrap();
        config.leaderboard_repository().unwrap();
        assert!(!config.data_dir.exists());
    }

    #[test]
    fn file_storage_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = RuntimeConfig {
            data_dir: dir.path().join("save"),
            ..RuntimeConfig::default()
        };

        config.settings_repository().unwrap().set("k", "v").unwrap();
        assert!(config.data_dir.join(FileSettingsRepository::FILE_NAME).exists());
        assert!(config.leaderboard_repository().unwrap().list().unwrap().is_empty());
    }
}
