//! HTTP client for the catalog endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, info, warn};
use url::Url;

use super::dto::CatalogProduct;
use super::settings::CatalogConfig;
use crate::domain::Product;
use crate::error::{Error, Result};
use crate::port::outbound::catalog::CatalogFetcher;

/// Fetches the product catalog with a single unauthenticated GET.
///
/// Failures are returned as-is; there is no retry. A response that is not a
/// JSON array fails the fetch, while individual items that do not decode are
/// logged and skipped.
pub struct HttpCatalogClient {
    http: HttpClient,
    url: Url,
}

impl HttpCatalogClient {
    /// Create a client for `url` with reqwest's default timeouts.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            http: HttpClient::new(),
            url,
        }
    }

    /// Create a client from configuration.
    ///
    /// # Errors
    /// Returns an error if the configured URL does not parse.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let url = Url::parse(&config.url)?;
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self { http, url })
    }
}

#[async_trait]
impl CatalogFetcher for HttpCatalogClient {
    async fn fetch_catalog(&self) -> Result<Vec<Product>> {
        info!(url = %self.url, "Fetching catalog");

        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        let items: Vec<serde_json::Value> = serde_json::from_str(&body)
            .map_err(|e| Error::Decode(format!("catalog response: {e}")))?;

        let products: Vec<Product> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<CatalogProduct>(item) {
                Ok(dto) => Some(Product::from(dto)),
                Err(e) => {
                    warn!(index, error = %e, "Skipping undecodable catalog item");
                    None
                }
            })
            .collect();

        debug!(count = products.len(), "Catalog fetched");
        Ok(products)
    }

    fn source(&self) -> &str {
        self.url.as_str()
    }
}
