//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{cart_items, favorites};

/// Database row for a favorite.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = favorites)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FavoriteRow {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
    pub created_at: String,
}

/// Database row for a cart line.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = cart_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CartItemRow {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub quantity: i32,
    pub created_at: String,
}

/// Encode a timestamp as fixed-width RFC 3339 so text ordering matches time.
pub fn encode_timestamp(at: &chrono::DateTime<chrono::Utc>) -> String {
    at.to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}

/// Decode a timestamp written by [`encode_timestamp`].
///
/// # Errors
/// Returns a decode error if the text is not RFC 3339.
pub fn decode_timestamp(text: &str) -> crate::error::Result<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(text)
        .map(|at| at.with_timezone(&chrono::Utc))
        .map_err(|e| crate::error::Error::Decode(e.to_string()))
}
