//! Repository layer for data that outlives a match
//!
//! Repositories handle data the match engine never sees:
//! - Player names and last chosen settings
//! - Leaderboard history of finalized matches
//!
//! Both come in a file-backed flavour for real runs and an in-memory flavour
//! for tests and `HAND_CRICKET_PERSISTENCE=false`.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileLeaderboardRepository, FileSettingsRepository};
pub use memory::{InMemoryLeaderboardRepo, InMemorySettingsRepo};
pub use traits::{LeaderboardRepository, SettingsRepository};
