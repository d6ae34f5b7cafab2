//! Application configuration loading and validation.
//!
//! Provides the [`Config`] struct that aggregates all settings. Configuration
//! is loaded from a TOML file; `EMARKET_CATALOG_URL` and `EMARKET_DATABASE`
//! override the file when set.
//!
//! # Example
//!
//! ```no_run
//! use emarket::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use super::logging::{LoggingConfig, LOG_FORMATS};
use super::paths;
use crate::adapter::outbound::catalog::CatalogConfig;
use crate::error::{ConfigError, Result};

/// Environment variable overriding [`CatalogConfig::url`].
pub const ENV_CATALOG_URL: &str = "EMARKET_CATALOG_URL";
/// Environment variable overriding [`Config::database`].
pub const ENV_DATABASE: &str = "EMARKET_DATABASE";

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Remote catalog endpoint and timeouts.
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Path to SQLite database file.
    ///
    /// Defaults to `~/.emarket/emarket.db`.
    #[serde(default = "default_database_path")]
    pub database: String,
}

fn default_database_path() -> String {
    paths::default_database().to_string_lossy().into_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            logging: LoggingConfig::default(),
            database: default_database_path(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., a zero timeout)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Built-in defaults with environment overrides, for running without a
    /// config file.
    ///
    /// # Errors
    /// Returns an error if an override fails validation.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides looked up by environment variable name.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(url) = get(ENV_CATALOG_URL) {
            self.catalog.url = url;
        }
        if let Some(database) = get(ENV_DATABASE) {
            self.database = database;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns the first field that is missing or out of range.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "catalog.url",
            }
            .into());
        }
        let url = Url::parse(&self.catalog.url).map_err(|e| ConfigError::InvalidValue {
            field: "catalog.url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "catalog.url",
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }
            .into());
        }
        if self.catalog.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.catalog.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging, raising the level for each `-v` on top of the
    /// configured one.
    pub fn init_logging(&self, verbose: u8) {
        self.logging.with_verbosity(verbose).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn parse(content: &str) -> Result<Config> {
        let mut config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_overrides(|_| None);
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.catalog, CatalogConfig::default());
        assert_eq!(config.catalog.timeout_ms, 10_000);
        assert_eq!(config.catalog.connect_timeout_ms, 5_000);
        assert!(config.database.ends_with("emarket.db"));
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn sections_override_defaults() {
        let config = parse(
            r#"
            database = "/tmp/shop.db"

            [catalog]
            url = "http://localhost:8080/products"
            timeout_ms = 2500

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.database, "/tmp/shop.db");
        assert_eq!(config.catalog.url, "http://localhost:8080/products");
        assert_eq!(config.catalog.timeout_ms, 2500);
        assert_eq!(config.catalog.connect_timeout_ms, 5_000);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = parse("[catalog\nurl = ").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn empty_url_is_missing_field() {
        let err = parse("[catalog]\nurl = \"\"").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField {
                field: "catalog.url"
            })
        ));
    }

    #[test]
    fn non_http_url_is_rejected() {
        let err = parse("[catalog]\nurl = \"ftp://example.com/p\"").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "catalog.url",
                ..
            })
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = parse("[catalog]\ntimeout_ms = 0").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "catalog.timeout_ms",
                ..
            })
        ));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let err = parse("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            })
        ));
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            ENV_CATALOG_URL => Some("http://127.0.0.1:9/products".into()),
            ENV_DATABASE => Some("/tmp/override.db".into()),
            _ => None,
        });

        assert_eq!(config.catalog.url, "http://127.0.0.1:9/products");
        assert_eq!(config.database, "/tmp/override.db");
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|_| Some("  ".into()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let err = Config::load("/nonexistent/emarket.toml").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
    }

    #[test]
    fn init_logging_with_verbosity_is_repeatable() {
        let config = Config::default();
        config.init_logging(2);
        config.init_logging(0);
    }
}
