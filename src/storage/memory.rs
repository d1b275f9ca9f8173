use crate::error::{BoardkitError, Result};
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory store backend, for tests and ephemeral state.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| BoardkitError::StorageError("store mutex poisoned".to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn write(&self, key: &str, value: String) -> Result<()> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_then_read() {
        let store = MemoryStore::new();

        store.write("k", "v".to_string()).await.unwrap();
        assert_eq!(store.read("k").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_read_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.read("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let store = MemoryStore::new();

        store.write("k", "first".to_string()).await.unwrap();
        store.write("k", "second".to_string()).await.unwrap();

        assert_eq!(store.read("k").await.unwrap(), Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_noop() {
        let store = MemoryStore::new();
        store.remove("missing").await.unwrap();
    }

    #[tokio::test]
    async fn test_clear_wipes_all_entries() {
        let store = MemoryStore::new();
        store.write("a", "1".to_string()).await.unwrap();
        store.write("b", "2".to_string()).await.unwrap();

        store.clear().await.unwrap();

        assert_eq!(store.read("a").await.unwrap(), None);
        assert_eq!(store.read("b").await.unwrap(), None);
    }
}
