//! File-based key/value storage.
//!
//! All keys live in a single JSON object:
//! ```json
//! {
//!   "token": "eyJhbGciOi...",
//!   "user": "{\"email\":\"a@b.com\",...}"
//! }
//! ```
//! Every batch is applied by rewriting the whole file to a sibling temp
//! file and renaming it over the original, so a reader never observes half
//! of a batch.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pathfinders_application::ports::{FileSystem, KeyValueStorage, StorageError};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

type Items = BTreeMap<String, String>;

/// Key/value storage persisted to one JSON file.
#[derive(Debug)]
pub struct FileStorage<F> {
    fs: F,
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl<F: FileSystem> FileStorage<F> {
    /// Creates storage backed by the file at `path`.
    ///
    /// The file and its parent directories are created on first write.
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("storage"), OsString::from);
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn load(&self) -> Result<Items, StorageError> {
        if !self.fs.exists(&self.path).await {
            return Ok(Items::new());
        }

        let content = self.fs.read_file(&self.path).await?;
        from_json_bytes(&content).map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    async fn save(&self, items: &Items) -> Result<(), StorageError> {
        let content =
            to_json_stable_bytes(items).map_err(|e| StorageError::Serialization(e.to_string()))?;

        let temp = self.temp_path();
        self.fs.write_file(&temp, &content).await?;
        self.fs.rename(&temp, &self.path).await?;

        debug!(path = %self.path.display(), keys = items.len(), "storage file written");
        Ok(())
    }

    /// Loads for modification; unreadable content is discarded so a
    /// write can repair the file.
    async fn load_for_update(&self) -> Result<Items, StorageError> {
        match self.load().await {
            Err(StorageError::Corrupt(reason)) => {
                warn!(path = %self.path.display(), %reason, "discarding corrupt storage file");
                Ok(Items::new())
            }
            other => other,
        }
    }
}

#[async_trait]
impl<F: FileSystem> KeyValueStorage for FileStorage<F> {
    async fn get_items(&self, keys: &[&str]) -> Result<Vec<Option<String>>, StorageError> {
        let items = self.load().await?;
        Ok(keys.iter().map(|key| items.get(*key).cloned()).collect())
    }

    async fn set_items(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.load_for_update().await?;
        for (key, value) in entries {
            items.insert((*key).to_string(), value.clone());
        }
        self.save(&items).await
    }

    async fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        if !self.fs.exists(&self.path).await {
            return Ok(());
        }

        let mut items = self.load_for_update().await?;
        for key in keys {
            items.remove(*key);
        }

        if items.is_empty() {
            self.fs.remove_file(&self.path).await?;
            debug!(path = %self.path.display(), "storage file removed");
            Ok(())
        } else {
            self.save(&items).await
        }
    }
}
