//! Scripted catalog fetcher.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::Product;
use crate::error::{Error, Result};
use crate::port::outbound::catalog::CatalogFetcher;

/// A catalog with pre-loaded fetch results.
///
/// Each `fetch_catalog()` pops the next scripted result; once the script is
/// exhausted every call returns the base catalog.
pub struct ScriptedCatalog {
    base: Vec<Product>,
    results: Mutex<VecDeque<Result<Vec<Product>>>>,
    fetch_count: Arc<AtomicU32>,
}

impl ScriptedCatalog {
    pub fn new(base: Vec<Product>) -> Self {
        Self {
            base,
            results: Mutex::new(VecDeque::new()),
            fetch_count: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn with_results(self, results: Vec<Result<Vec<Product>>>) -> Self {
        *self.results.lock() = results.into();
        self
    }

    /// Queue a single failing fetch.
    pub fn failing_once(self) -> Self {
        self.results
            .lock()
            .push_back(Err(Error::Decode("scripted failure".into())));
        self
    }

    /// Number of fetches performed so far.
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogFetcher for ScriptedCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<Product>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        let scripted = self.results.lock().pop_front();
        scripted.unwrap_or_else(|| Ok(self.base.clone()))
    }

    fn source(&self) -> &str {
        "scripted"
    }
}
