//! Key/value storage port
//!
//! Models the browser-style storage area the session lives in: string keys,
//! string values, and batch operations that either apply completely or not
//! at all.

use async_trait::async_trait;

use crate::ports::FileSystemError;

/// Errors raised by a [`KeyValueStorage`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing file system failed.
    #[error("file system error: {0}")]
    FileSystem(#[from] FileSystemError),

    /// Stored data exists but cannot be parsed.
    #[error("corrupt storage: {0}")]
    Corrupt(String),

    /// A value could not be serialized for storage.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted string key/value area.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Reads several keys from one consistent snapshot.
    ///
    /// The result has one entry per requested key, in order.
    async fn get_items(&self, keys: &[&str]) -> Result<Vec<Option<String>>, StorageError>;

    /// Writes all `items` in one operation, overwriting existing values.
    async fn set_items(&self, items: &[(&str, String)]) -> Result<(), StorageError>;

    /// Removes all `keys` in one operation. Missing keys are not an error.
    async fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError>;

    /// Reads a single key.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut values = self.get_items(&[key]).await?;
        Ok(values.pop().flatten())
    }
}
