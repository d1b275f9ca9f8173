use crate::error::Result;
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-backed store: one JSON object file mapping keys to their raw
/// stored text.
///
/// Each operation is a whole-file read-modify-write; concurrent writers
/// are not coordinated and the last write wins.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    const STORE_FILE: &'static str = "store.json";

    /// Creates a store rooted at the given directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join(Self::STORE_FILE),
        }
    }

    async fn load_entries(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let contents = fs::read_to_string(&self.path).await?;
        let entries: HashMap<String, String> = serde_json::from_str(&contents)?;
        Ok(entries)
    }

    async fn save_entries(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_entries().await?.get(key).cloned())
    }

    async fn write(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.load_entries().await?;
        entries.insert(key.to_string(), value);
        self.save_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.load_entries().await?;
        if entries.remove(key).is_some() {
            self.save_entries(&entries).await?;
        }
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).await?;
        }
        Ok(())
    }
}
