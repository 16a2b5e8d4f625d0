//! Configuration management for Bookshelf
//!
//! Configuration is layered: built-in defaults, then a TOML file, then
//! environment variables, then command-line flags applied by the binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::app::client::ClientConfig;
use crate::app::models::YearZone;
use crate::constants::{endpoints, env as env_constants, http};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP client settings
    pub client: ClientConfigToml,
    /// Catalog endpoint locations
    pub endpoints: EndpointConfig,
    /// Bookshelf presentation settings
    pub shelf: ShelfConfig,
    /// Sign-up form policy
    pub signup: SignUpConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// TOML-friendly client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfigToml {
    /// Request timeout, e.g. "30s"
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    /// Connect timeout, e.g. "10s"
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ClientConfigToml {
    fn default() -> Self {
        Self {
            request_timeout: http::DEFAULT_TIMEOUT,
            connect_timeout: http::CONNECT_TIMEOUT,
            user_agent: http::USER_AGENT.to_string(),
        }
    }
}

impl ClientConfigToml {
    /// Convert to runtime ClientConfig
    pub fn to_runtime_config(&self) -> ClientConfig {
        ClientConfig {
            request_timeout: self.request_timeout,
            connect_timeout: self.connect_timeout,
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Catalog endpoint locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL shared by both endpoints
    pub base_url: String,
    /// Path of the countries document
    pub countries_path: String,
    /// Path of the books document
    pub books_path: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: endpoints::BASE_URL.to_string(),
            countries_path: endpoints::COUNTRIES_PATH.to_string(),
            books_path: endpoints::BOOKS_PATH.to_string(),
        }
    }
}

/// Bookshelf presentation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    /// Zone used to derive publication years
    pub year_zone: YearZone,
}

/// Sign-up form policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignUpConfig {
    /// Reject submissions without a selected country
    pub require_country: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level for the application
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration with multi-source precedence:
    /// 1. Default values
    /// 2. Config file (if exists)
    /// 3. Environment variables
    ///
    /// CLI overrides are applied by the caller afterwards.
    pub async fn load(config_file_override: Option<PathBuf>) -> ConfigResult<Self> {
        let config_path = match config_file_override {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound { path });
                }
                Some(path)
            }
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(path) => Self::load_from_file(&path).await?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from environment variables
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(env_constants::BASE_URL) {
            debug!("Base URL overridden from {}", env_constants::BASE_URL);
            self.endpoints.base_url = base_url;
        }
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> ConfigResult<()> {
        if self.client.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "client.request_timeout".to_string(),
                value: "0s".to_string(),
                reason: "Timeout must be greater than zero".to_string(),
            });
        }
        if self.client.connect_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "client.connect_timeout".to_string(),
                value: "0s".to_string(),
                reason: "Timeout must be greater than zero".to_string(),
            });
        }
        self.base_url()?;
        Ok(())
    }

    /// Parsed endpoint base URL
    pub fn base_url(&self) -> ConfigResult<Url> {
        let url = Url::parse(&self.endpoints.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "endpoints.base_url".to_string(),
            value: self.endpoints.base_url.clone(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                field: "endpoints.base_url".to_string(),
                value: self.endpoints.base_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }
        Ok(url)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from("./bookshelf.toml")];
        if let Some(path) = Self::default_config_path() {
            search_paths.push(path);
        }

        let found = search_paths.into_iter().find(|path| path.exists());
        match &found {
            Some(path) => debug!("Found config file: {}", path.display()),
            None => debug!("No config file found in standard locations"),
        }
        found
    }

    /// Default config file path for the current user
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bookshelf").join("config.toml"))
    }

    /// Load configuration from a TOML file
    async fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let config = Self::from_toml_str(&content)?;
        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.endpoints.base_url, endpoints::BASE_URL);
        assert_eq!(config.shelf.year_zone, YearZone::Utc);
        assert!(!config.signup.require_country);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [client]
            request_timeout = "5s"

            [shelf]
            year_zone = "local"
            "#,
        )
        .unwrap();
        assert_eq!(config.client.request_timeout, Duration::from_secs(5));
        assert_eq!(config.client.connect_timeout, http::CONNECT_TIMEOUT);
        assert_eq!(config.shelf.year_zone, YearZone::Local);
        assert_eq!(config.endpoints.books_path, endpoints::BOOKS_PATH);
    }

    #[test]
    fn test_invalid_toml() {
        let result = AppConfig::from_toml_str("[shelf]\nyear_zone = \"mars\"");
        assert!(matches!(result, Err(ConfigError::InvalidFormat(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = AppConfig::default();
        config.client.request_timeout = Duration::ZERO;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "client.request_timeout"
        ));
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let mut config = AppConfig::default();
        config.endpoints.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.endpoints.base_url = "mailto:someone@example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_load_from_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bookshelf.toml");
        tokio::fs::write(
            &path,
            "[endpoints]\nbase_url = \"http://127.0.0.1:9\"\n\n[signup]\nrequire_country = true\n",
        )
        .await
        .unwrap();

        let config = AppConfig::load(Some(path)).await.unwrap();
        assert!(config.signup.require_country);
        assert_eq!(config.endpoints.countries_path, endpoints::COUNTRIES_PATH);
    }

    #[tokio::test]
    async fn test_load_missing_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");
        let result = AppConfig::load(Some(path)).await;
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }
}
