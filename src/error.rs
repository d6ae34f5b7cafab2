use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl Error {
    /// Shorthand for a missing product.
    pub fn product_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "product",
            id: id.into(),
        }
    }

    /// Shorthand for a missing cart line.
    pub fn cart_item_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "cart item",
            id: id.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = Error::cart_item_not_found("42");
        assert_eq!(err.to_string(), "cart item not found: 42");
    }

    #[test]
    fn config_error_is_transparent() {
        let err: Error = ConfigError::MissingField { field: "url" }.into();
        assert_eq!(err.to_string(), "missing required field: url");
    }
}
