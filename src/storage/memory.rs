//! In-process storage backend.
//!
//! Holds values in a map for the lifetime of the process. Used by tests and
//! by callers that want content without touching disk.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{validate_key, KeyValueStore, StorageError};

/// Volatile key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Check whether a key is present
    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Check if the store holds no keys
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("a").await.unwrap(), None);

        store.set("a", "1").await.unwrap();
        store.set("a", "2").await.unwrap();
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("2"));
        assert_eq!(store.len().await, 1);

        store.remove("a").await.unwrap();
        store.remove("a").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_with_entry() {
        let store = MemoryStore::with_entry("k", "v");
        assert!(store.contains("k").await);
    }

    #[tokio::test]
    async fn test_rejects_invalid_key() {
        let store = MemoryStore::new();
        let result = store.set("../x", "v").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }
}
