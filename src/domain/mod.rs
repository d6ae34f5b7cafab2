//! Storefront domain types.
//!
//! Products arrive from the remote catalog; favorites and cart lines are the
//! locally persisted records derived from them.

pub mod cart;
pub mod error;
pub mod favorite;
pub mod id;
pub mod money;
pub mod product;

pub use cart::{CartRecord, CartSummary};
pub use error::DomainError;
pub use favorite::FavoriteRecord;
pub use id::ProductId;
pub use money::Price;
pub use product::Product;
