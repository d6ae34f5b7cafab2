//! SQLite favorite store implementation.

use std::collections::HashSet;

use diesel::prelude::*;

use super::database::connection::{checkout, DbPool};
use super::database::model::{decode_timestamp, encode_timestamp, FavoriteRow};
use super::database::schema::favorites;
use crate::domain::{FavoriteRecord, Price, Product, ProductId};
use crate::error::{Error, Result};
use crate::port::outbound::store::FavoriteStore;

/// SQLite-backed favorite store.
pub struct SqliteFavoriteStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteFavoriteStore {
    /// Create a new SQLite favorite store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn to_row(record: &FavoriteRecord) -> FavoriteRow {
        FavoriteRow {
            id: record.id.to_string(),
            name: record.name.clone(),
            price: record.price.to_string(),
            image: record.image.clone(),
            description: record.description.clone(),
            created_at: encode_timestamp(&record.created_at),
        }
    }

    fn from_row(row: FavoriteRow) -> Result<FavoriteRecord> {
        Ok(FavoriteRecord {
            id: ProductId::from(row.id),
            price: Price::parse(&row.price)?,
            created_at: decode_timestamp(&row.created_at)?,
            name: row.name,
            image: row.image,
            description: row.description,
        })
    }
}

impl FavoriteStore for SqliteFavoriteStore {
    fn save_favorite(&self, product: &Product) -> Result<()> {
        let row = Self::to_row(&FavoriteRecord::from(product));
        let mut conn = checkout(&self.pool)?;

        diesel::replace_into(favorites::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }

    fn remove_favorite(&self, id: &ProductId) -> Result<bool> {
        let mut conn = checkout(&self.pool)?;

        let deleted = diesel::delete(favorites::table.find(id.as_str()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }

    fn favorite_ids(&self) -> Result<HashSet<ProductId>> {
        let mut conn = checkout(&self.pool)?;

        let ids: Vec<String> = favorites::table
            .select(favorites::id)
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(ids.into_iter().map(ProductId::from).collect())
    }

    fn favorites(&self) -> Result<Vec<FavoriteRecord>> {
        let mut conn = checkout(&self.pool)?;

        let rows: Vec<FavoriteRow> = favorites::table
            .select(FavoriteRow::as_select())
            .order((favorites::created_at.asc(), favorites::id.asc()))
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }
}
