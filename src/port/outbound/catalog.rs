//! Remote catalog port.

use async_trait::async_trait;

use crate::domain::Product;
use crate::error::Result;

/// Source of the full product catalog.
///
/// A fetch is a single one-shot request. Implementations do not retry; a
/// transport or decode failure is returned as one error value.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Fetch every product in the catalog, in server order.
    async fn fetch_catalog(&self) -> Result<Vec<Product>>;

    /// Human-readable name of the source, for logs.
    fn source(&self) -> &str;
}
