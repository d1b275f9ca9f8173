use crate::error::Result;
use crate::storage::KeyValueStore;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Typed get/set/clear over an injected [`KeyValueStore`], with JSON as
/// the wire format for structured values.
///
/// Keys of any displayable type are coerced to their string form before
/// use; the namespace is whatever the underlying store provides, shared
/// and unprefixed.
#[derive(Clone)]
pub struct StorageService {
    store: Arc<dyn KeyValueStore>,
}

impl StorageService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Reads and decodes the value under `key`.
    ///
    /// An absent key, a store read failure, and a JSON decode failure all
    /// yield `fallback`; decode errors are swallowed, so corrupt stored
    /// text is indistinguishable from an unset key. Callers that need to
    /// see corruption must go through [`KeyValueStore::read`] directly.
    pub async fn get<T, K>(&self, key: K, fallback: T) -> T
    where
        T: DeserializeOwned,
        K: fmt::Display,
    {
        let raw = match self.store.read(&key.to_string()).await {
            Ok(raw) => raw,
            Err(_) => return fallback,
        };
        match raw {
            Some(raw) => serde_json::from_str(&raw).unwrap_or(fallback),
            None => fallback,
        }
    }

    /// Encodes `value` as JSON and writes it under `key`, overwriting any
    /// prior value unconditionally.
    pub async fn set<T, K>(&self, value: &T, key: K) -> Result<()>
    where
        T: Serialize + ?Sized,
        K: fmt::Display,
    {
        let key = key.to_string();
        let encoded = serde_json::to_string(value)?;
        debug!(%key, "persisting value");
        self.store.write(&key, encoded).await
    }

    /// Removes the entry for `key`; no-op when absent.
    pub async fn clear<K: fmt::Display>(&self, key: K) -> Result<()> {
        self.store.remove(&key.to_string()).await
    }

    /// Removes every entry in the underlying store, including ones not
    /// written through this wrapper.
    pub async fn clear_all(&self) -> Result<()> {
        self.store.clear().await
    }
}
