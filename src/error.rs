use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Authentication required: {0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl Error {
    /// Failures the user fixes by editing input rather than retrying
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// True when the stored credentials were rejected and a fresh login is needed
    pub fn requires_login(&self) -> bool {
        matches!(self, Error::Unauthorized(_))
    }

    /// Network failures and non-2xx responses, which get an inline retry control
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Network(_) | Error::Request(_) | Error::Http { .. } | Error::Deserialization(_)
        )
    }

    /// Text shown to the user, without the internal category prefix
    pub fn user_message(&self) -> String {
        match self {
            Error::Unauthorized(_) => "로그인이 필요합니다. 다시 로그인해주세요.".to_string(),
            Error::Validation(msg) | Error::NotFound(msg) => msg.clone(),
            Error::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        if self.is_validation() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
