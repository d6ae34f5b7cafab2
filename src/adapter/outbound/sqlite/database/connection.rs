//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, migration support, and per-connection
//! pragmas for the local SQLite database.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A connection checked out of a [`DbPool`].
pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

const DEFAULT_POOL_SIZE: u32 = 5;

const BUSY_TIMEOUT_PRAGMA: &str = "PRAGMA busy_timeout=5000";

/// Applies connection pragmas to every pooled connection.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        diesel::sql_query(BUSY_TIMEOUT_PRAGMA)
            .execute(conn)
            .map(|_| ())
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool for the given database URL.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str) -> Result<DbPool> {
    create_pool_sized(database_url, DEFAULT_POOL_SIZE)
}

/// Create a connection pool holding at most `max_size` connections.
///
/// `:memory:` databases are private to each connection, so callers using one
/// must pass `max_size = 1` for every checkout to see the same tables.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool_sized(database_url: &str, max_size: u32) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size.max(1))
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = checkout(pool)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Connection(e.to_string()))?;
    Ok(())
}

/// Check a connection out of the pool.
///
/// # Errors
/// Returns a connection error if the pool is exhausted or broken.
pub fn checkout(pool: &DbPool) -> Result<DbConn> {
    pool.get().map_err(|e| Error::Connection(e.to_string()))
}
