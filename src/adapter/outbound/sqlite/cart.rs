//! SQLite cart store implementation.

use diesel::prelude::*;

use super::database::connection::{checkout, DbPool};
use super::database::model::{decode_timestamp, encode_timestamp, CartItemRow};
use super::database::schema::cart_items;
use crate::domain::{CartRecord, Price, Product, ProductId};
use crate::error::{Error, Result};
use crate::port::outbound::store::CartStore;

/// SQLite-backed cart store.
///
/// The increment path reads and writes inside one `BEGIN IMMEDIATE`
/// transaction, so concurrent adds for the same product cannot both insert.
pub struct SqliteCartStore {
    /// Database connection pool.
    pool: DbPool,
}

fn quantity_column(quantity: u32) -> Result<i32> {
    i32::try_from(quantity)
        .map_err(|_| Error::Database(format!("cart quantity {quantity} is out of range")))
}

impl SqliteCartStore {
    /// Create a new SQLite cart store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn to_row(record: &CartRecord) -> Result<CartItemRow> {
        Ok(CartItemRow {
            id: record.id.to_string(),
            name: record.name.clone(),
            price: record.price.to_string(),
            image: record.image.clone(),
            quantity: quantity_column(record.quantity)?,
            created_at: encode_timestamp(&record.created_at),
        })
    }

    fn from_row(row: CartItemRow) -> Result<CartRecord> {
        let quantity = u32::try_from(row.quantity).map_err(|_| {
            Error::Decode(format!(
                "negative quantity {} for cart item {}",
                row.quantity, row.id
            ))
        })?;

        Ok(CartRecord {
            price: Price::parse(&row.price)?,
            created_at: decode_timestamp(&row.created_at)?,
            id: ProductId::from(row.id),
            name: row.name,
            image: row.image,
            quantity,
        })
    }
}

impl CartStore for SqliteCartStore {
    fn save_or_increment_cart(&self, product: &Product) -> Result<CartRecord> {
        let new_row = Self::to_row(&CartRecord::new(product))?;
        let mut conn = checkout(&self.pool)?;

        let row = conn
            .immediate_transaction::<_, diesel::result::Error, _>(|conn| {
                let existing: Option<CartItemRow> = cart_items::table
                    .find(product.id.as_str())
                    .select(CartItemRow::as_select())
                    .first(conn)
                    .optional()?;

                match existing {
                    Some(mut row) => {
                        row.quantity = row.quantity.checked_add(1).ok_or_else(|| {
                            diesel::result::Error::QueryBuilderError(
                                format!("cart quantity for {} is out of range", row.id).into(),
                            )
                        })?;
                        diesel::update(cart_items::table.find(product.id.as_str()))
                            .set(cart_items::quantity.eq(row.quantity))
                            .execute(conn)?;
                        Ok(row)
                    }
                    None => {
                        diesel::insert_into(cart_items::table)
                            .values(&new_row)
                            .execute(conn)?;
                        Ok(new_row)
                    }
                }
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        Self::from_row(row)
    }

    fn set_cart_quantity(&self, id: &ProductId, quantity: u32) -> Result<bool> {
        let quantity = quantity_column(quantity)?;
        let mut conn = checkout(&self.pool)?;

        let updated = diesel::update(cart_items::table.find(id.as_str()))
            .set(cart_items::quantity.eq(quantity))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(updated > 0)
    }

    fn cart_item(&self, id: &ProductId) -> Result<Option<CartRecord>> {
        let mut conn = checkout(&self.pool)?;

        let row: Option<CartItemRow> = cart_items::table
            .find(id.as_str())
            .select(CartItemRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        row.map(Self::from_row).transpose()
    }

    fn cart_items(&self) -> Result<Vec<CartRecord>> {
        let mut conn = checkout(&self.pool)?;

        let rows: Vec<CartItemRow> = cart_items::table
            .select(CartItemRow::as_select())
            .order((cart_items::created_at.asc(), cart_items::id.asc()))
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }

    fn remove_cart(&self, id: &ProductId) -> Result<bool> {
        let mut conn = checkout(&self.pool)?;

        let deleted = diesel::delete(cart_items::table.find(id.as_str()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }
}
