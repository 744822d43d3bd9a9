//! JSON file storage backend
//!
//! All entries live in one JSON object on disk. Every write rewrites the
//! file through a temp file and an atomic rename.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::storage::{
    error::{StorageError, StorageResult},
    traits::KeyValueStore,
};

/// File name of the store inside the data directory
pub const STORE_FILE_NAME: &str = "store.json";

/// File-backed key-value store
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `<data_dir>/store.json`, creating the directory if needed
    pub async fn open_in(data_dir: &Path) -> StorageResult<Self> {
        fs::create_dir_all(data_dir).await?;
        Self::open(data_dir.join(STORE_FILE_NAME)).await
    }

    /// Open the store at an explicit file path
    pub async fn open(path: PathBuf) -> StorageResult<Self> {
        let entries = Self::load_or_create(&path).await?;
        debug!("Opened key-value store at {} ({} entries)", path.display(), entries.len());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_or_create(path: &Path) -> StorageResult<BTreeMap<String, String>> {
        if !fs::try_exists(path).await? {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(path).await?;
        match serde_json::from_str(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                // Keep the unreadable file around for inspection and start empty
                let backup = path.with_extension(format!("json.corrupted.{}", Utc::now().timestamp()));
                fs::rename(path, &backup).await?;
                warn!(
                    "Store file corrupted ({}), backed up to {}",
                    e,
                    backup.display()
                );
                Ok(BTreeMap::new())
            }
        }
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let temp_file = self.path.with_extension("json.tmp");
        fs::write(&temp_file, json).await?;
        fs::rename(&temp_file, &self.path)
            .await
            .map_err(|e| StorageError::unavailable(format!("Failed to replace store file: {e}")))
    }

    /// Apply `change` to a copy of the entries; the copy replaces the live map
    /// only once it is on disk. `change` returns false when nothing changed.
    async fn update(
        &self,
        change: impl FnOnce(&mut BTreeMap<String, String>) -> bool + Send,
    ) -> StorageResult<()> {
        let mut entries = self.entries.lock().await;
        let mut next = entries.clone();
        if !change(&mut next) {
            return Ok(());
        }
        self.persist(&next).await?;
        *entries = next;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.update(|next| {
            next.insert(key.to_string(), value.to_string());
            true
        })
        .await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.update(|next| next.remove(key).is_some()).await
    }

    async fn multi_set(&self, pairs: &[(&str, String)]) -> StorageResult<()> {
        self.update(|next| {
            for (key, value) in pairs {
                next.insert((*key).to_string(), value.clone());
            }
            !pairs.is_empty()
        })
        .await
    }
}
