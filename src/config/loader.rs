use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use super::{get_config_dir, CareFinderConfig, CONFIG_FILE_NAME};
use crate::error::{Error, Result};

/// Loads configuration in precedence order: defaults, TOML file, environment
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this file instead of the platform config directory; it must exist
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            explicit_path: Some(path.into()),
        }
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.explicit_path {
            Some(path) => Ok(path.clone()),
            None => Ok(get_config_dir()?.join(CONFIG_FILE_NAME)),
        }
    }

    pub async fn load(&self) -> Result<CareFinderConfig> {
        self.load_with_env(|key| std::env::var(key).ok()).await
    }

    pub async fn load_with_env(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<CareFinderConfig> {
        let mut config = self.load_file().await?;
        config.merge_env(lookup);
        config.validate()?;
        Ok(config)
    }

    async fn load_file(&self) -> Result<CareFinderConfig> {
        let path = match self.config_path() {
            Ok(path) => path,
            Err(e) if self.explicit_path.is_none() => {
                debug!("No config directory ({}), using defaults", e);
                return Ok(CareFinderConfig::default());
            }
            Err(e) => return Err(e),
        };

        if !fs::try_exists(&path).await? {
            if self.explicit_path.is_some() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            debug!("No config file at {}, using defaults", path.display());
            return Ok(CareFinderConfig::default());
        }

        debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(&path).await?;
        Ok(toml::from_str(&content)?)
    }
}
