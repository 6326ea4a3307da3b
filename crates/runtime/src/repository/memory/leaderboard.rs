//! In-memory LeaderboardRepository implementation for tests and ephemeral runs.

use std::sync::RwLock;

use crate::leaderboard::MatchRecord;
use crate::repository::{LeaderboardRepository, RepositoryError, Result};

#[derive(Default)]
pub struct InMemoryLeaderboardRepo {
    records: RwLock<Vec<MatchRecord>>,
}

impl InMemoryLeaderboardRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeaderboardRepository for InMemoryLeaderboardRepo {
    fn append(&self, record: &MatchRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.push(record.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<MatchRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.clone())
    }

    fn clear(&self) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.clear();
        Ok(())
    }
}
