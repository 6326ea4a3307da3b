//! Repository contracts for data that outlives a single match.

use super::Result;
use crate::leaderboard::MatchRecord;

/// String key/value store for player names and last chosen settings.
///
/// Keys are opaque to the store; [`crate::settings::PlayerSettings`] owns the
/// key names and value parsing.
pub trait SettingsRepository: Send + Sync {
    /// Load the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// Append-only history of finalized matches.
pub trait LeaderboardRepository: Send + Sync {
    /// Append one record
    fn append(&self, record: &MatchRecord) -> Result<()>;

    /// All records, oldest first
    fn list(&self) -> Result<Vec<MatchRecord>>;

    /// Most recent `limit` records, newest first
    fn recent(&self, limit: usize) -> Result<Vec<MatchRecord>> {
        let mut records = self.list()?;
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }

    /// Drop all records
    fn clear(&self) -> Result<()>;
}
