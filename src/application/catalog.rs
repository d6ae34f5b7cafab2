//! Product list reconciler.
//!
//! Merges the remote catalog with the locally persisted favorite flags and
//! keeps a filtered view for display. Every completed operation emits one
//! [`ListUpdate`] on a broadcast channel.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, error, warn};

use crate::domain::{Product, ProductId};
use crate::error::Result;
use crate::port::outbound::catalog::CatalogFetcher;
use crate::port::outbound::notifier::Event;
use crate::port::outbound::store::FavoriteStore;

const UPDATE_CHANNEL_CAPACITY: usize = 64;

/// Which operation produced a [`ListUpdate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    Fetched,
    Filtered,
    FavoriteUpdated,
}

/// Notification sent after the displayed list changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListUpdate {
    pub kind: UpdateKind,
    /// Number of products in the displayed list.
    pub visible: usize,
}

/// The catalog as shown to the user.
///
/// `all_products` is the authoritative list from the last successful fetch;
/// `products` is the subsequence currently displayed. Mutations take
/// `&mut self`, so a single owner drives the list.
pub struct ProductList {
    catalog: Arc<dyn CatalogFetcher>,
    favorites: Arc<dyn FavoriteStore>,
    all_products: Vec<Product>,
    products: Vec<Product>,
    search_text: String,
    tx: broadcast::Sender<ListUpdate>,
}

impl ProductList {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogFetcher>, favorites: Arc<dyn FavoriteStore>) -> Self {
        let (tx, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            catalog,
            favorites,
            all_products: Vec::new(),
            products: Vec::new(),
            search_text: String::new(),
            tx,
        }
    }

    /// Subscribe to list updates.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ListUpdate> {
        self.tx.subscribe()
    }

    /// Fetch the catalog and overlay favorite flags.
    ///
    /// On failure the lists keep their previous contents and no update is
    /// emitted.
    ///
    /// # Errors
    /// Returns the fetcher's error unchanged.
    pub async fn fetch_products(&mut self) -> Result<()> {
        let mut fetched = match self.catalog.fetch_catalog().await {
            Ok(products) => products,
            Err(err) => {
                error!(source = self.catalog.source(), error = %err, "Failed to fetch products");
                return Err(err);
            }
        };

        let favorite_ids = self.favorites.favorite_ids().unwrap_or_else(|err| {
            warn!(error = %err, "Failed to load favorites, showing none");
            HashSet::new()
        });
        for product in &mut fetched {
            product.is_favorite = favorite_ids.contains(&product.id);
        }

        debug!(
            count = fetched.len(),
            favorites = favorite_ids.len(),
            "Products reconciled"
        );
        self.products = fetched.clone();
        self.all_products = fetched;
        self.notify(UpdateKind::Fetched);
        Ok(())
    }

    /// Show the products whose name contains `search_text`, ignoring case.
    ///
    /// An empty search restores the full list.
    pub fn filter_products(&mut self, search_text: &str) {
        self.search_text = search_text.to_string();
        self.products = if search_text.is_empty() {
            self.all_products.clone()
        } else {
            let needle = search_text.to_lowercase();
            self.all_products
                .iter()
                .filter(|p| p.name_contains(&needle))
                .cloned()
                .collect()
        };
        self.notify(UpdateKind::Filtered);
    }

    /// Persist a favorite change and reflect it in both lists.
    ///
    /// Store failures are logged; the in-memory flag is updated regardless.
    pub fn update_favorite(&mut self, product_id: &ProductId, is_favorite: bool) {
        if let Some(product) = self.all_products.iter().find(|p| &p.id == product_id) {
            let stored = if is_favorite {
                self.favorites.save_favorite(product)
            } else {
                self.favorites.remove_favorite(product_id).map(|_| ())
            };
            if let Err(err) = stored {
                warn!(
                    product_id = %product_id,
                    is_favorite,
                    error = %err,
                    "Failed to persist favorite"
                );
            }
        }

        for product in self
            .all_products
            .iter_mut()
            .chain(self.products.iter_mut())
            .filter(|p| &p.id == product_id)
        {
            product.is_favorite = is_favorite;
        }
        self.notify(UpdateKind::FavoriteUpdated);
    }

    /// React to a bus event.
    pub fn apply(&mut self, event: &Event) {
        if let Event::FavoritesChanged {
            product_id,
            is_favorite,
        } = event
        {
            self.update_favorite(product_id, *is_favorite);
        }
    }

    /// The displayed list.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Every product from the last successful fetch.
    #[must_use]
    pub fn all_products(&self) -> &[Product] {
        &self.all_products
    }

    /// Look a product up by id for the detail view.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.all_products.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    fn notify(&self, kind: UpdateKind) {
        // No receivers is fine.
        let _ = self.tx.send(ListUpdate {
            kind,
            visible: self.products.len(),
        });
    }
}
