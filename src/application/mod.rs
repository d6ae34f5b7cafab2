//! Application services.
//!
//! Each service owns the state of one storefront view and talks to the
//! outside world only through ports:
//!
//! - [`catalog::ProductList`]: catalog with favorite overlay and search
//! - [`favorites::FavoriteList`]: the favorites view
//! - [`cart::CartService`]: cart mutations and totals

pub mod cart;
pub mod catalog;
pub mod favorites;

pub use cart::CartService;
pub use catalog::{ListUpdate, ProductList, UpdateKind};
pub use favorites::FavoriteList;
