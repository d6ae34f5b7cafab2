//! Database layer for persistence using Diesel ORM.

pub mod connection;
pub mod model;
pub mod schema;

pub use connection::{checkout, create_pool, create_pool_sized, run_migrations, DbConn, DbPool};
