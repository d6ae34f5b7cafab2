//! emarket - storefront client core.
//!
//! Browses a remote product catalog, keeps favorites and a shopping cart in a
//! local SQLite database, and keeps independent views in sync through a typed
//! event bus.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] - Products, prices, favorite and cart records
//! - [`port`] - Traits the application depends on: catalog, stores, notifier
//! - [`adapter`] - HTTP catalog client, SQLite and in-memory stores,
//!   notifiers, and the command-line front end
//! - [`application`] - Product list reconciler, favorites list, cart service
//! - [`infrastructure`] - Configuration, logging, and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use emarket::infrastructure::{config::Config, Storefront};
//!
//! # async fn run() -> emarket::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let storefront = Storefront::from_config(&config)?;
//!
//! let mut products = storefront.product_list();
//! products.fetch_products().await?;
//! products.filter_products("shoe");
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
