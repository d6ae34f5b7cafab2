//! Wire format of the catalog endpoint.

use serde::Deserialize;

use crate::domain::{Price, Product, ProductId};

/// One element of the catalog array.
///
/// Unknown fields such as `createdAt`, `model` or `brand` are ignored. The
/// favorite flag is local state and never read from the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl From<CatalogProduct> for Product {
    fn from(dto: CatalogProduct) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            price: dto.price,
            image: dto.image,
            description: dto.description,
            category: dto.category,
            is_favorite: false,
        }
    }
}
