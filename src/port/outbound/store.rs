//! Persistence ports for favorites and cart lines.
//!
//! Both collections are keyed by product id. Calls are synchronous and every
//! mutation is committed before the call returns. Nothing here is
//! transactional across calls.

use std::collections::HashSet;

use crate::domain::{CartRecord, FavoriteRecord, Product, ProductId};
use crate::error::Result;

/// Storage operations for favorites.
pub trait FavoriteStore: Send + Sync {
    /// Save a favorite for `product`, replacing any existing record with the
    /// same id.
    fn save_favorite(&self, product: &Product) -> Result<()>;

    /// Delete the favorite with `id`. Returns false if there was none.
    fn remove_favorite(&self, id: &ProductId) -> Result<bool>;

    /// Ids of every favorited product.
    fn favorite_ids(&self) -> Result<HashSet<ProductId>>;

    /// Every favorite, oldest first.
    fn favorites(&self) -> Result<Vec<FavoriteRecord>>;
}

/// Storage operations for the cart.
pub trait CartStore: Send + Sync {
    /// Increment the quantity of the line for `product`, or insert a new line
    /// with quantity 1. Returns the resulting line.
    fn save_or_increment_cart(&self, product: &Product) -> Result<CartRecord>;

    /// Overwrite the quantity of the line with `id`.
    ///
    /// No validation is performed; callers remove the line instead of
    /// writing zero. Returns false if there was no such line.
    fn set_cart_quantity(&self, id: &ProductId, quantity: u32) -> Result<bool>;

    /// Get one line by id.
    fn cart_item(&self, id: &ProductId) -> Result<Option<CartRecord>>;

    /// Every line, oldest first.
    fn cart_items(&self) -> Result<Vec<CartRecord>>;

    /// Delete the line with `id`. Returns false if there was none.
    fn remove_cart(&self, id: &ProductId) -> Result<bool>;
}
