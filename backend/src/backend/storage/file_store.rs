//! # File Store
//!
//! File-backed implementation of [`KeyValueStore`]: one JSON document per
//! logical key under a base directory, written atomically so a crashed
//! write never corrupts the previous snapshot.

use anyhow::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::backend::storage::traits::KeyValueStore;

/// FileStore persists each logical key as `<key>.json` in its base directory
#[derive(Clone)]
pub struct FileStore {
    base_directory: PathBuf,
}

impl FileStore {
    /// Create a new file store rooted at the given directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a file store in the default data directory
    ///
    /// This uses "Case Tracker" under the Documents folder (falling back to
    /// the home directory), unless the CASE_TRACKER_DATA_DIR environment
    /// variable points somewhere else.
    pub fn new_default() -> Result<Self> {
        if let Ok(dir) = std::env::var("CASE_TRACKER_DATA_DIR") {
            let path = PathBuf::from(dir);
            info!("Using data directory from CASE_TRACKER_DATA_DIR: {}", path.display());
            return Self::new(path);
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let data_dir = base.join("Case Tracker");

        info!("Using default data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.file_path(key);

        if !file_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&file_path)?;
        Ok(Some(contents))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let file_path = self.file_path(key);

        // Write to a temporary file, then atomically move it into place
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &file_path)?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let file_path = self.file_path(key);

        if file_path.exists() {
            fs::remove_file(&file_path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Helper to create a test store backed by a temporary directory
    fn create_test_store() -> Result<(FileStore, TempDir)> {
        let temp_dir = TempDir::new()?;
        let store = FileStore::new(temp_dir.path())?;
        Ok((store, temp_dir))
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let (store, _temp_dir) = create_test_store().expect("Failed to create test store");

        let value = store.get("volunteers").await.expect("Failed to read key");
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let (store, _temp_dir) = create_test_store().expect("Failed to create test store");

        store.set("cases", "[]").await.expect("Failed to write key");

        let value = store.get("cases").await.expect("Failed to read key");
        assert_eq!(value, Some("[]".to_string()));
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let (store, _temp_dir) = create_test_store().expect("Failed to create test store");

        store.set("cases", "first").await.expect("Failed to write key");
        store.set("cases", "second").await.expect("Failed to write key");

        let value = store.get("cases").await.expect("Failed to read key");
        assert_eq!(value, Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_set_leaves_no_temp_file_behind() {
        let (store, temp_dir) = create_test_store().expect("Failed to create test store");

        store.set("cases", "[]").await.expect("Failed to write key");

        assert!(temp_dir.path().join("cases.json").exists());
        assert!(!temp_dir.path().join("cases.tmp").exists());
    }

    #[tokio::test]
    async fn test_delete() {
        let (store, _temp_dir) = create_test_store().expect("Failed to create test store");

        store.set("currentVolunteer", "{}").await.expect("Failed to write key");
        store.delete("currentVolunteer").await.expect("Failed to delete key");

        let value = store.get("currentVolunteer").await.expect("Failed to read key");
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_not_an_error() {
        let (store, _temp_dir) = create_test_store().expect("Failed to create test store");

        store.delete("currentVolunteer").await.expect("Delete of missing key failed");
    }

    #[test]
    fn test_new_default_honors_env_override() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::env::set_var("CASE_TRACKER_DATA_DIR", temp_dir.path());

        let store = FileStore::new_default().expect("Failed to create store");
        assert_eq!(store.base_directory(), temp_dir.path());

        std::env::remove_var("CASE_TRACKER_DATA_DIR");
    }

    #[tokio::test]
    async fn test_values_survive_a_new_store_on_the_same_directory() {
        let (store, temp_dir) = create_test_store().expect("Failed to create test store");

        store.set("volunteers", "[1,2]").await.expect("Failed to write key");
        drop(store);

        let reopened = FileStore::new(temp_dir.path()).expect("Failed to reopen store");
        let value = reopened.get("volunteers").await.expect("Failed to read key");
        assert_eq!(value, Some("[1,2]".to_string()));
    }
}
