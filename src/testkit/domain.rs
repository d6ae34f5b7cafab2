//! Builders for domain primitives used across tests.

use rust_decimal::Decimal;

use crate::domain::{Price, Product, ProductId};

/// Create a [`ProductId`] from a string.
pub fn id(raw: &str) -> ProductId {
    ProductId::new(raw)
}

/// A product with the given id, name and price and placeholder media.
pub fn product(id: &str, name: &str, price: Decimal) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::new(price),
        image: format!("https://img.example/{id}.png"),
        description: format!("{name} description"),
        category: None,
        is_favorite: false,
    }
}

/// A small catalog: `1 Running Shoe`, `2 Sun Hat`, `3 shoe polish`, `4 Lamp`.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product("1", "Running Shoe", Decimal::new(12_000, 2)),
        product("2", "Sun Hat", Decimal::new(2_550, 2)),
        product("3", "shoe polish", Decimal::new(499, 2)),
        product("4", "Lamp", Decimal::new(4_000, 2)),
    ]
}
