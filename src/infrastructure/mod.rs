//! Infrastructure: configuration, logging, and adapter wiring.

pub mod bootstrap;
pub mod config;

pub use bootstrap::Storefront;
