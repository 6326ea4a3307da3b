//! In-memory repository implementations.

mod leaderboard;
mod settings;

pub use leaderboard::InMemoryLeaderboardRepo;
pub use settings::InMemorySettingsRepo;
