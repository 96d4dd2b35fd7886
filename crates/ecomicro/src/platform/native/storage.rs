//! Native storage implementation using the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform::storage::{Storage, StorageError};

/// Filesystem-backed key-value store.
///
/// Each key lives in its own `{key}.json` file under the data directory,
/// so a corrupt entry never takes the others down with it.
pub struct NativeStorage {
    root: PathBuf,
}

impl NativeStorage {
    /// Create a new native storage rooted at the given data directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the root path of the storage directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for NativeStorage {
    fn read_key(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn write_key(&self, key: &str, json: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data dir: {}", e)))?;
        let path = self.key_path(key);
        fs::write(&path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{keys, load_or, save};

    #[test]
    fn test_missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = NativeStorage::new(dir.path().to_path_buf());
        assert!(storage.read_key(keys::FAVORITES).unwrap().is_none());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = NativeStorage::new(dir.path().to_path_buf());

        let ids = vec!["rabanete-roxo".to_string()];
        save(&storage, keys::FAVORITES, &ids);
        let loaded: Vec<String> = load_or(&storage, keys::FAVORITES, vec![]);
        assert_eq!(loaded, ids);
    }

    #[test]
    fn test_creates_data_dir_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("data");
        let storage = NativeStorage::new(root.clone());

        storage.write_key(keys::ONBOARDING_COMPLETE, "true").unwrap();
        assert!(root.join("onboardingComplete.json").exists());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let storage = NativeStorage::new(dir.path().to_path_buf());

        storage.write_key(keys::CULTIVATED, "{broken").unwrap();
        let cultivated: std::collections::HashMap<String, bool> =
            load_or(&storage, keys::CULTIVATED, Default::default());
        assert!(cultivated.is_empty());
    }
}
