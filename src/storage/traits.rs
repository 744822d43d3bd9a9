//! Core trait definition for the key-value store

use async_trait::async_trait;
use std::sync::Arc;

use super::error::StorageResult;

/// Asynchronous string key-value store shared by every screen.
///
/// Single-user, single-process: there are no transactions and the last
/// writer wins. Screens receive the store as a [`SharedStore`] rather than
/// reaching for a global.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key was never written or was removed
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a single value
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key; removing a missing key is not an error
    async fn remove(&self, key: &str) -> StorageResult<()>;

    /// Write several values. Backends may override this to persist once.
    async fn multi_set(&self, entries: &[(&str, String)]) -> StorageResult<()> {
        for (key, value) in entries {
            self.set(key, value).await?;
        }
        Ok(())
    }
}

/// Store handle injected into screens and the API client
pub type SharedStore = Arc<dyn KeyValueStore>;
