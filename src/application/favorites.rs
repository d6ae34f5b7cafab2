//! Favorites list.

use std::sync::Arc;

use tracing::warn;

use crate::domain::Product;
use crate::port::outbound::notifier::{Event, EventBus};
use crate::port::outbound::store::FavoriteStore;

/// The user's favorited products, oldest first.
///
/// Toggling publishes [`Event::FavoritesChanged`]; the product list owns
/// persistence of the flag.
pub struct FavoriteList {
    store: Arc<dyn FavoriteStore>,
    bus: EventBus,
    products: Vec<Product>,
}

impl FavoriteList {
    #[must_use]
    pub fn new(store: Arc<dyn FavoriteStore>, bus: EventBus) -> Self {
        Self {
            store,
            bus,
            products: Vec::new(),
        }
    }

    /// Reload from the store. A store error empties the list.
    pub fn load(&mut self) {
        self.products = match self.store.favorites() {
            Ok(records) => records.into_iter().map(Product::from).collect(),
            Err(err) => {
                warn!(error = %err, "Failed to load favorites");
                Vec::new()
            }
        };
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Publish the flipped favorite flag of `product`.
    ///
    /// The list is unchanged until the product list has persisted the flag
    /// and the event comes back through [`apply`](Self::apply).
    pub fn toggle(&self, product: &Product) {
        self.bus.publish(Event::FavoritesChanged {
            product_id: product.id.clone(),
            is_favorite: !product.is_favorite,
        });
    }

    /// React to a bus event.
    pub fn apply(&mut self, event: &Event) {
        if matches!(event, Event::FavoritesChanged { .. }) {
            self.load();
        }
    }
}
