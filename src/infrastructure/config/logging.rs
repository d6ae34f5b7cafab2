//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".into()
}

fn default_format() -> String {
    "pretty".into()
}

/// Formats accepted by [`LoggingConfig::format`].
pub const LOG_FORMATS: &[&str] = &["pretty", "json"];

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// A subscriber that is already installed is left in place. Logs go to
    /// stderr so command output on stdout stays parseable.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let _ = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    }

    /// Same configuration with the level raised by `-v` flags.
    #[must_use]
    pub fn with_verbosity(&self, verbose: u8) -> Self {
        let level = match verbose {
            0 => return self.clone(),
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        Self {
            level: level.into(),
            format: self.format.clone(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}
