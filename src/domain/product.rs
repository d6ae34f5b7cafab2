//! Catalog products.

use serde::{Deserialize, Serialize};

use super::favorite::FavoriteRecord;
use super::id::ProductId;
use super::money::Price;

/// A product from the remote catalog with the local favorite overlay.
///
/// Everything except `is_favorite` comes from the server; `is_favorite` is
/// merged in from the favorites store and is not part of product identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Image URL.
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Product {
    /// True when the name contains `needle` ignoring case.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

impl From<FavoriteRecord> for Product {
    fn from(record: FavoriteRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            price: record.price,
            image: record.image,
            description: record.description,
            category: None,
            is_favorite: true,
        }
    }
}
