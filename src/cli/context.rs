//! Shared state of a single CLI invocation

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;

use crate::api::ApiClient;
use crate::config::CareFinderConfig;
use crate::storage::{FileStore, SharedStore};

pub struct CliContext {
    pub config: CareFinderConfig,
    store: SharedStore,
}

impl CliContext {
    /// Open the persisted store in the configured data directory
    pub async fn open(config: CareFinderConfig) -> Result<Self> {
        let data_dir = config.data_dir()?;
        let store = FileStore::open_in(&data_dir)
            .await
            .with_context(|| format!("Failed to open store in {}", data_dir.display()))?;
        debug!("Using store at {}", store.path().display());

        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }

    pub fn store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    pub fn api(&self) -> Result<Arc<ApiClient>> {
        let client = ApiClient::new(
            &self.config.api_url,
            self.config.request_timeout(),
            self.store(),
        )?;
        Ok(Arc::new(client))
    }
}
