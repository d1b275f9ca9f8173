use crate::error::Result;
use async_trait::async_trait;

pub mod memory;
pub mod service;

#[cfg(feature = "file-store")]
pub mod file_store;

pub use memory::MemoryStore;
pub use service::StorageService;

#[cfg(feature = "file-store")]
pub use file_store::FileStore;

/// String-keyed, string-valued persistent store.
///
/// One global namespace, no prefixing, no coordination between writers;
/// the last write wins. [`StorageService`] layers JSON encoding on top,
/// and callers can substitute an in-memory or namespaced implementation.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the raw stored text for `key`, or `None` when absent.
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, overwriting any prior value.
    async fn write(&self, key: &str, value: String) -> Result<()>;

    /// Removes the entry for `key`; no-op when absent.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Removes every entry in the store, including ones written by other
    /// callers. Global and destructive.
    async fn clear(&self) -> Result<()>;
}
