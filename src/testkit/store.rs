//! Store doubles for error-path tests.

use std::collections::HashSet;

use crate::domain::{CartRecord, FavoriteRecord, Product, ProductId};
use crate::error::{Error, Result};
use crate::port::outbound::store::{CartStore, FavoriteStore};

/// A store whose every operation fails with a database error.
#[derive(Debug, Default)]
pub struct FailingStore;

fn fail<T>() -> Result<T> {
    Err(Error::Database("store unavailable".into()))
}

impl FavoriteStore for FailingStore {
    fn save_favorite(&self, _product: &Product) -> Result<()> {
        fail()
    }

    fn remove_favorite(&self, _id: &ProductId) -> Result<bool> {
        fail()
    }

    fn favorite_ids(&self) -> Result<HashSet<ProductId>> {
        fail()
    }

    fn favorites(&self) -> Result<Vec<FavoriteRecord>> {
        fail()
    }
}

impl CartStore for FailingStore {
    fn save_or_increment_cart(&self, _product: &Product) -> Result<CartRecord> {
        fail()
    }

    fn set_cart_quantity(&self, _id: &ProductId, _quantity: u32) -> Result<bool> {
        fail()
    }

    fn cart_item(&self, _id: &ProductId) -> Result<Option<CartRecord>> {
        fail()
    }

    fn cart_items(&self) -> Result<Vec<CartRecord>> {
        fail()
    }

    fn remove_cart(&self, _id: &ProductId) -> Result<bool> {
        fail()
    }
}
