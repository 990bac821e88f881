//! In-memory key/value storage.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::{KeyValueStorage, StorageError};

/// Thread-safe in-memory storage.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates an empty storage area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Stores a raw value, bypassing any session encoding.
    #[cfg(test)]
    pub(crate) async fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.items.write().await.insert(key.into(), value.into());
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get_items(&self, keys: &[&str]) -> Result<Vec<Option<String>>, StorageError> {
        let items = self.items.read().await;
        Ok(keys.iter().map(|key| items.get(*key).cloned()).collect())
    }

    async fn set_items(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        let mut items = self.items.write().await;
        for (key, value) in entries {
            items.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }

    async fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut items = self.items.write().await;
        for key in keys {
            items.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let storage = MemoryStorage::new();
        storage
            .set_items(&[("a", "1".to_string()), ("b", "2".to_string())])
            .await
            .unwrap();

        let values = storage.get_items(&["b", "missing", "a"]).await.unwrap();
        assert_eq!(
            values,
            vec![Some("2".to_string()), None, Some("1".to_string())]
        );
        assert_eq!(storage.get_item("a").await.unwrap().as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_remove_missing_is_ok() {
        let storage = MemoryStorage::new();
        storage.insert_raw("a", "1").await;

        storage.remove_items(&["a", "never-set"]).await.unwrap();
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        other.insert_raw("k", "v").await;
        assert_eq!(storage.get_item("k").await.unwrap().as_deref(), Some("v"));
    }
}
