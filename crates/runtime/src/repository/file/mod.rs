//! File-based repository implementations.

mod leaderboard;
mod settings;

pub use leaderboard::FileLeaderboardRepository;
pub use settings::FileSettingsRepository;
