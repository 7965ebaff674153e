//! The raw Sqlite queries behind the storefront traits.
//!
//! Functions here work against a plain connection so that callers decide whether they run inside
//! a transaction or straight off the pool.

pub mod categories;
pub mod deposits;
pub mod orders;
pub mod payment_methods;
pub mod products;
pub mod providers;
pub mod ratings;
pub mod reports;
pub mod users;

use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

/// Opens a connection pool on the given database URL, creating the database file if it does not
/// exist yet.
pub async fn new_pool(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().max_connections(max_connections).connect_with(options).await?;
    Ok(pool)
}
