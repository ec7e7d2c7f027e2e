//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits. The pool is created
//! lazily: no connection is opened until a query needs one, so the process
//! starts (and the liveness endpoints answer) even while MySQL is down.

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

/// Default maximum connections for the pool.
/// Kept low for a small single-service deployment.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default ceiling on waiting for a pooled connection.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Create a MySQL connection pool.
///
/// # Arguments
///
/// * `database_url` - MySQL connection string
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed. Connectivity problems only
/// surface on first use.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("mysql://root:pw@localhost:3306/forthegiving_db")?;
/// ```
pub fn create_pool(database_url: &str) -> Result<MySqlPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_ACQUIRE_TIMEOUT)
}

/// Create a MySQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - MySQL connection string
/// * `max_connections` - Maximum number of connections in the pool
/// * `acquire_timeout` - How long a request may wait for a connection
pub fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_lazy(database_url)
}
