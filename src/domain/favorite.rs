//! Locally persisted favorites.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::ProductId;
use super::money::Price;
use super::product::Product;

/// A favorited product snapshot. At most one record exists per product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteRecord {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub description: String,
    /// When the product was favorited; only used for listing order.
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for FavoriteRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            description: product.description.clone(),
            created_at: Utc::now(),
        }
    }
}
