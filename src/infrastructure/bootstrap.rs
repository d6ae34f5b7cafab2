//! Wiring from configuration to concrete adapters.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::adapter::outbound::catalog::HttpCatalogClient;
use crate::adapter::outbound::memory::MemoryStore;
use crate::adapter::outbound::notifier::LogNotifier;
use crate::adapter::outbound::sqlite::database::{create_pool, run_migrations};
use crate::adapter::outbound::sqlite::{SqliteCartStore, SqliteFavoriteStore};
use crate::application::{CartService, FavoriteList, ProductList};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::outbound::catalog::CatalogFetcher;
use crate::port::outbound::notifier::{EventBus, Subscription};
use crate::port::outbound::store::{CartStore, FavoriteStore};

/// The assembled storefront: adapters, the event bus, and factories for the
/// views built on them.
pub struct Storefront {
    catalog: Arc<dyn CatalogFetcher>,
    favorites: Arc<dyn FavoriteStore>,
    cart: Arc<dyn CartStore>,
    bus: EventBus,
    _log: Subscription,
}

impl Storefront {
    /// Assemble from explicit adapters.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogFetcher>,
        favorites: Arc<dyn FavoriteStore>,
        cart: Arc<dyn CartStore>,
    ) -> Self {
        let bus = EventBus::new();
        let log = bus.subscribe(Arc::new(LogNotifier));
        Self {
            catalog,
            favorites,
            cart,
            bus,
            _log: log,
        }
    }

    /// Open the SQLite database, run migrations, and build the HTTP client.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated, or the
    /// catalog URL is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        if let Some(parent) = Path::new(&config.database).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let pool = create_pool(&config.database)?;
        run_migrations(&pool)?;
        info!(database = %config.database, "Database ready");

        let catalog = HttpCatalogClient::from_config(&config.catalog)?;
        debug!(url = %config.catalog.url, "Catalog client configured");

        Ok(Self::new(
            Arc::new(catalog),
            Arc::new(SqliteFavoriteStore::new(pool.clone())),
            Arc::new(SqliteCartStore::new(pool)),
        ))
    }

    /// Storefront over `catalog` with both stores held in memory.
    #[must_use]
    pub fn in_memory(catalog: Arc<dyn CatalogFetcher>) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(catalog, Arc::clone(&store) as Arc<dyn FavoriteStore>, store)
    }

    #[must_use]
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    #[must_use]
    pub fn favorite_store(&self) -> Arc<dyn FavoriteStore> {
        Arc::clone(&self.favorites)
    }

    #[must_use]
    pub fn cart_store(&self) -> Arc<dyn CartStore> {
        Arc::clone(&self.cart)
    }

    /// A fresh, unfetched product list.
    #[must_use]
    pub fn product_list(&self) -> ProductList {
        ProductList::new(Arc::clone(&self.catalog), Arc::clone(&self.favorites))
    }

    /// A favorites view; call [`FavoriteList::load`] before reading it.
    #[must_use]
    pub fn favorite_list(&self) -> FavoriteList {
        FavoriteList::new(Arc::clone(&self.favorites), self.bus.clone())
    }

    #[must_use]
    pub fn cart_service(&self) -> CartService {
        CartService::new(Arc::clone(&self.cart), self.bus.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::catalog::ScriptedCatalog;
    use crate::testkit::domain::{id, sample_catalog};

    #[test]
    fn log_notifier_is_subscribed() {
        let storefront = Storefront::in_memory(Arc::new(ScriptedCatalog::new(vec![])));
        assert_eq!(storefront.bus().len(), 1);
    }

    #[tokio::test]
    async fn views_share_stores() {
        let storefront = Storefront::in_memory(Arc::new(ScriptedCatalog::new(sample_catalog())));

        let mut products = storefront.product_list();
        products.fetch_products().await.unwrap();
        products.update_favorite(&id("2"), true);

        let mut favorites = storefront.favorite_list();
        favorites.load();
        assert_eq!(favorites.len(), 1);

        let cart = storefront.cart_service();
        cart.add(&products.products()[0]).unwrap();
        assert_eq!(storefront.cart_store().cart_items().unwrap().len(), 1);
    }

    #[test]
    fn from_config_creates_database_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            database: dir
                .path()
                .join("nested/shop.db")
                .to_string_lossy()
                .into_owned(),
            ..Config::default()
        };

        let storefront = Storefront::from_config(&config).unwrap();
        assert!(dir.path().join("nested/shop.db").exists());
        assert!(storefront.favorite_store().favorites().unwrap().is_empty());
    }
}
