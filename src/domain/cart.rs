//! Locally persisted cart lines and totals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::id::ProductId;
use super::money::Price;
use super::product::Product;

/// One cart line. At most one record exists per product id and a persisted
/// record always has `quantity >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRecord {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
}

impl CartRecord {
    /// A fresh line for `product` with quantity 1.
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
            created_at: Utc::now(),
        }
    }

    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.times(self.quantity)
    }
}

/// Aggregate view of the cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    /// Number of distinct lines.
    pub lines: usize,
    /// Sum of quantities across lines.
    pub quantity: u32,
    /// Sum of line totals.
    pub total: Decimal,
}

impl CartSummary {
    #[must_use]
    pub fn of(items: &[CartRecord]) -> Self {
        items.iter().fold(
            Self {
                lines: items.len(),
                ..Self::default()
            },
            |acc, item| Self {
                quantity: acc.quantity.saturating_add(item.quantity),
                total: acc.total + item.line_total(),
                ..acc
            },
        )
    }
}
