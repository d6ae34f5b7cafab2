//! SQLite persistence adapters.
//!
//! Provides SQLite-backed implementations of the favorite and cart stores
//! using Diesel ORM.

pub mod cart;
pub mod database;
pub mod favorite;

pub use cart::SqliteCartStore;
pub use favorite::SqliteFavoriteStore;
