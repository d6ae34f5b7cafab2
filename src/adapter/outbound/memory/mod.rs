//! In-memory store implementation for testing.
//!
//! Holds favorites and cart lines in insertion order so listings match the
//! SQLite store's oldest-first ordering without relying on timestamps.

use std::collections::HashSet;

use parking_lot::RwLock;

use crate::domain::{CartRecord, FavoriteRecord, Product, ProductId};
use crate::error::Result;
use crate::port::outbound::store::{CartStore, FavoriteStore};

/// In-memory store for testing purposes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    favorites: RwLock<Vec<FavoriteRecord>>,
    cart: RwLock<Vec<CartRecord>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoriteStore for MemoryStore {
    fn save_favorite(&self, product: &Product) -> Result<()> {
        let record = FavoriteRecord::from(product);
        let mut favorites = self.favorites.write();
        match favorites.iter_mut().find(|f| f.id == record.id) {
            Some(existing) => *existing = record,
            None => favorites.push(record),
        }
        Ok(())
    }

    fn remove_favorite(&self, id: &ProductId) -> Result<bool> {
        let mut favorites = self.favorites.write();
        let before = favorites.len();
        favorites.retain(|f| &f.id != id);
        Ok(favorites.len() != before)
    }

    fn favorite_ids(&self) -> Result<HashSet<ProductId>> {
        Ok(self.favorites.read().iter().map(|f| f.id.clone()).collect())
    }

    fn favorites(&self) -> Result<Vec<FavoriteRecord>> {
        Ok(self.favorites.read().clone())
    }
}

impl CartStore for MemoryStore {
    fn save_or_increment_cart(&self, product: &Product) -> Result<CartRecord> {
        let mut cart = self.cart.write();
        if let Some(line) = cart.iter_mut().find(|l| l.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return Ok(line.clone());
        }
        let line = CartRecord::new(product);
        cart.push(line.clone());
        Ok(line)
    }

    fn set_cart_quantity(&self, id: &ProductId, quantity: u32) -> Result<bool> {
        let mut cart = self.cart.write();
        match cart.iter_mut().find(|l| &l.id == id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn cart_item(&self, id: &ProductId) -> Result<Option<CartRecord>> {
        Ok(self.cart.read().iter().find(|l| &l.id == id).cloned())
    }

    fn cart_items(&self) -> Result<Vec<CartRecord>> {
        Ok(self.cart.read().clone())
    }

    fn remove_cart(&self, id: &ProductId) -> Result<bool> {
        let mut cart = self.cart.write();
        let before = cart.len();
        cart.retain(|l| &l.id != id);
        Ok(cart.len() != before)
    }
}
