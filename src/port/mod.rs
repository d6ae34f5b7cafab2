//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams between the application layer and the outside
//! world. Adapters implement them; tests substitute their own.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │  ProductList, Cart, ... │
//!                    └────────────┬────────────┘
//!          ┌──────────────────────┼──────────────────────┐
//!          ▼                      ▼                      ▼
//!   ┌─────────────┐        ┌─────────────┐        ┌─────────────┐
//!   │  Catalog    │        │   Stores    │        │  Event bus  │
//!   │  (HTTP)     │        │  (SQLite)   │        │ (notifiers) │
//!   └─────────────┘        └─────────────┘        └─────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::catalog::CatalogFetcher`] - Remote product catalog
//! - [`outbound::store::FavoriteStore`], [`outbound::store::CartStore`] - Local persistence
//! - [`outbound::notifier::Notifier`] - Cross-view event delivery

pub mod outbound;
