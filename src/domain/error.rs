//! Domain validation errors.

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Price text could not be read as a decimal amount.
    #[error("invalid price '{raw}'")]
    InvalidPrice {
        /// The rejected input.
        raw: String,
    },
}
