//! Process-level settings derived from the command line

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Level from the config file or environment, used when no `-v` is given
    pub configured_level: Option<String>,
}

impl AppConfig {
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            configured_level: None,
        }
    }

    pub fn with_configured_level(mut self, level: Option<String>) -> Self {
        self.configured_level = level;
        self
    }

    /// Filter directive for the subscriber. `-v` flags win over configuration.
    pub fn log_level(&self) -> String {
        match (self.verbose, &self.configured_level) {
            (0, Some(level)) => level.clone(),
            (0, None) => "info".to_string(),
            (1, _) => "debug".to_string(),
            (2, _) => "trace".to_string(),
            _ => "trace,hyper=debug,tower=debug".to_string(),
        }
    }
}
