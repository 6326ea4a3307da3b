//! File-based SettingsRepository implementation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::repository::{RepositoryError, Result, SettingsRepository};

/// Stores all settings in one pretty-printed JSON object (`settings.json`).
///
/// Every write rewrites the whole file through a temp file and an atomic
/// rename, so a crash never leaves a half-written object behind.
pub struct FileSettingsRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSettingsRepository {
    pub const FILE_NAME: &'static str = "settings.json";

    /// Create a repository rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            path: base_dir.join(Self::FILE_NAME),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let bytes = fs::read(&self.path)?;
        if bytes.is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_slice(&bytes).map_err(|e| {
            RepositoryError::CorruptedData(format!("{}: {}", self.path.display(), e))
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(values)?;
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl SettingsRepository for FileSettingsRepository {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut values = self.read_all()?;
        values.insert(key.to_owned(), value.to_owned());
        self.write_all(&values)?;

        tracing::debug!("Saved setting {} to {}", key, self.path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut values = self.read_all()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
            tracing::debug!("Removed setting {}", key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        {
            let repo = FileSettingsRepository::new(dir.path()).unwrap();
            repo.set("player1Name", "Asha").unwrap();
            repo.set("selectedOvers", "3").unwrap();
        }

        let repo = FileSettingsRepository::new(dir.path()).unwrap();
        assert_eq!(repo.get("player1Name").unwrap().as_deref(), Some("Asha"));
        assert_eq!(repo.get("selectedOvers").unwrap().as_deref(), Some("3"));
        assert_eq!(repo.get("missing").unwrap(), None);
    }

    #[test]
    fn remove_deletes_only_that_key() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path()).unwrap();
        repo.set("a", "1").unwrap();
        repo.set("b", "2").unwrap();
        repo.remove("a").unwrap();
        repo.remove("never-set").unwrap();

        assert_eq!(repo.get("a").unwrap(), None);
        assert_eq!(repo.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn garbage_file_is_reported_as_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path()).unwrap();
        fs::write(repo.path(), b"not json").unwrap();

        assert!(matches!(
            repo.get("a"),
            Err(RepositoryError::CorruptedData(_))
        ));
    }
}
