//! File-based LeaderboardRepository implementation.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::leaderboard::MatchRecord;
use crate::repository::{LeaderboardRepository, RepositoryError, Result};

/// Append-only match history stored as JSON lines (`leaderboard.jsonl`).
///
/// # File Format
///
/// One serialized [`MatchRecord`] per line, oldest first. Appending never
/// rewrites earlier lines.
pub struct FileLeaderboardRepository {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl FileLeaderboardRepository {
    pub const FILE_NAME: &'static str = "leaderboard.jsonl";

    /// Create a repository rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            path: base_dir.join(Self::FILE_NAME),
            append_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardRepository for FileLeaderboardRepository {
    fn append(&self, record: &MatchRecord) -> Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self
            .append_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        tracing::debug!("Appended match record to {}", self.path.display());
        Ok(())
    }

    fn list(&self) -> Result<Vec<MatchRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    RepositoryError::CorruptedData(format!(
                        "{} line {}: {}",
                        self.path.display(),
                        index + 1,
                        e
                    ))
                })
            })
            .collect()
    }

    fn clear(&self) -> Result<()> {
        let _guard = self
            .append_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!("Cleared leaderboard at {}", self.path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::tests::record;
    use cricket_core::ResultType;

    #[test]
    fn records_append_in_order_and_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        {
            let repo = FileLeaderboardRepository::new(dir.path()).unwrap();
            repo.append(&record("You", "Computer", 12, 8)).unwrap();
            repo.append(&record("You", "Computer", 3, 9)).unwrap();
        }

        let repo = FileLeaderboardRepository::new(dir.path()).unwrap();
        let records = repo.list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].result, ResultType::Victory);
        assert_eq!(records[1].result, ResultType::Lose);

        let recent = repo.recent(1).unwrap();
        assert_eq!(recent, vec![records[1].clone()]);
    }

    #[test]
    fn clear_removes_history() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileLeaderboardRepository::new(dir.path()).unwrap();
        repo.append(&record("A", "B", 1, 1)).unwrap();
        repo.clear().unwrap();
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn corrupted_line_is_reported_with_its_number() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileLeaderboardRepository::new(dir.path()).unwrap();
        repo.append(&record("A", "B", 4, 2)).unwrap();
        let mut file = OpenOptions::new().append(true).open(repo.path()).unwrap();
        writeln!(file, "{{broken").unwrap();

        match repo.list() {
            Err(RepositoryError::CorruptedData(message)) => assert!(message.contains("line 2")),
            other => panic!("expected corrupted data, got {other:?}"),
        }
    }
}
