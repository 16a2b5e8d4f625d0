//! Error types for Bookshelf
//!
//! Fetch failures are ordinary values that screens turn into one-shot notices.
//! Configuration and client construction errors are the only ones that stop
//! the binary.

use std::path::PathBuf;
use thiserror::Error;

/// Failure outcomes of a remote list fetch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (timeout, DNS, refused connection) or a body
    /// that is not a JSON array of the expected records
    #[error("{0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("Server error: HTTP {status}")]
    Server { status: u16 },

    /// Server answered 2xx with an empty or null body
    #[error("Server returned an empty result")]
    EmptyResult,
}

impl FetchError {
    /// Short label for logging
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Server { .. } => "server",
            FetchError::EmptyResult => "empty",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Network(error.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Network(format!("Malformed response: {}", error))
    }
}

/// HTTP client construction errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// reqwest refused the builder settings
    #[error("Failed to build HTTP client")]
    Build(#[from] reqwest::Error),

    /// Endpoint could not be joined onto the base URL
    #[error("Invalid endpoint URL: {url} - {error}")]
    InvalidUrl { url: String, error: url::ParseError },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration file could not be read
    #[error("Failed to read configuration file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    /// Client construction error
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Client(_) => "client",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Fetch result type alias
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Client result type alias
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "connection refused"
        );
        assert_eq!(
            FetchError::Server { status: 404 }.to_string(),
            "Server error: HTTP 404"
        );
        assert_eq!(FetchError::EmptyResult.kind(), "empty");
    }

    #[test]
    fn test_parse_failure_folds_into_network() {
        let parse_error = serde_json::from_str::<Vec<u8>>("{}").unwrap_err();
        let fetch_error = FetchError::from(parse_error);
        assert!(matches!(fetch_error, FetchError::Network(ref msg) if msg.starts_with("Malformed response")));
    }

    #[test]
    fn test_app_error_category() {
        let app_error = AppError::from(ConfigError::NotFound {
            path: PathBuf::from("bookshelf.toml"),
        });
        assert_eq!(app_error.category(), "config");
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(AppError::from(io_error).category(), "io");
    }
}
