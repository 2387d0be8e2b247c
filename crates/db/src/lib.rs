//! Document store access for the robot store.
//!
//! - [`store`] -- the session-based store client and its two backends.
//! - [`models`] -- collection documents mapped onto typed views and DTOs.
//! - [`repositories`] -- one zero-sized repo per collection.

pub mod models;
pub mod repositories;
pub mod store;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Pool sizing and startup retry policy.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub max_connections: u32,
    /// Connection attempts before giving up on an eager connection (min 1).
    pub attempts: u32,
    pub retry_delay: Duration,
    /// How long a request waits for a pooled connection.
    pub acquire_timeout: Duration,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            max_connections: 20,
            attempts: 5,
            retry_delay: Duration::from_secs(1),
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Result of [`connect_with_retry`].
#[derive(Debug)]
pub struct PoolHandle {
    pub pool: DbPool,
    /// `false` if every eager attempt failed and the pool is lazy.
    pub connected: bool,
}

/// Create a connection pool, retrying the initial connection.
///
/// If all attempts fail the pool is still returned, in lazy mode: the server
/// can start, and each request that needs the store fails to acquire a
/// connection (and gets a 500) until the database comes back.
///
/// Only a malformed URL is a hard error.
pub async fn connect_with_retry(
    database_url: &str,
    options: &ConnectOptions,
) -> Result<PoolHandle, sqlx::Error> {
    let pool_options = || {
        PgPoolOptions::new()
            .max_connections(options.max_connections)
            .acquire_timeout(options.acquire_timeout)
    };

    let attempts = options.attempts.max(1);
    for attempt in 1..=attempts {
        match pool_options().connect(database_url).await {
            Ok(pool) => {
                return Ok(PoolHandle {
                    pool,
                    connected: true,
                })
            }
            Err(err) => {
                tracing::warn!(attempt, attempts, error = %err, "Database connection failed");
                if attempt < attempts {
                    tokio::time::sleep(options.retry_delay).await;
                }
            }
        }
    }

    tracing::error!(attempts, "Database unreachable, continuing with a lazy pool");
    let pool = pool_options().connect_lazy(database_url)?;
    Ok(PoolHandle {
        pool,
        connected: false,
    })
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations (collection tables and catalog seeds).
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
