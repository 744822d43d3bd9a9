use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

use crate::error::{Error, Result};
use crate::storage::backends::file::STORE_FILE_NAME;

pub mod loader;


pub use loader::ConfigLoader;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const ENV_API_URL: &str = "CAREFINDER_API_URL";
pub const ENV_DATA_DIR: &str = "CAREFINDER_DATA_DIR";
pub const ENV_LOG_LEVEL: &str = "CAREFINDER_LOG_LEVEL";
pub const ENV_TIMEOUT_SECS: &str = "CAREFINDER_TIMEOUT_SECS";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "carefinder", "carefinder")
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))
}

/// Directory holding `config.toml`
pub fn get_config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Default directory of the persisted store
pub fn get_data_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareFinderConfig {
    /// Base URL of the facility API, including the `/api` prefix
    pub api_url: String,
    pub request_timeout_secs: u64,
    /// Overrides the platform data directory
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Default for CareFinderConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_dir: None,
            log_level: None,
        }
    }
}

impl CareFinderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply overrides from an environment lookup
    pub fn merge_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = url;
        }

        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = Some(level);
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            match secs.parse::<u64>() {
                Ok(value) => self.request_timeout_secs = value,
                Err(_) => warn!("Ignoring {}={:?}: not a number of seconds", ENV_TIMEOUT_SECS, secs),
            }
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => get_data_dir(),
        }
    }

    pub fn store_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(STORE_FILE_NAME))
    }

    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api_url)
            .map_err(|e| Error::Config(format!("Invalid api_url {:?}: {e}", self.api_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "api_url must use http or https, got {:?}",
                url.scheme()
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config("request_timeout_secs must be at least 1".to_string()));
        }
        Ok(())
    }
}
