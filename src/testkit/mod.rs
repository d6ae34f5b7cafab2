//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`]: Builders for products and ids.
//! - [`catalog`]: [`ScriptedCatalog`](catalog::ScriptedCatalog), a
//!   [`CatalogFetcher`](crate::port::outbound::catalog::CatalogFetcher) with
//!   queued results.
//! - [`store`]: Store doubles that fail every call.

pub mod catalog;
pub mod domain;
pub mod store;
