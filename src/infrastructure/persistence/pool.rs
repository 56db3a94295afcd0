//! PostgreSQL connection pool setup and migrations.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::config::Config;
use crate::error::AppError;

/// Connects to PostgreSQL, retrying with exponential backoff.
///
/// Makes `db_connect_retries` additional attempts after the first failure
/// (200ms, 400ms, ... capped at 5s, jittered).
///
/// # Errors
///
/// Returns [`AppError::StorageUnavailable`] if every attempt fails.
pub async fn connect(config: &Config, database_url: &str) -> Result<PgPool, AppError> {
    let strategy = ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_retries);

    let pool = Retry::spawn(strategy, move || async move {
        let result = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .idle_timeout(Duration::from_secs(config.db_idle_timeout))
            .max_lifetime(Duration::from_secs(config.db_max_lifetime))
            .connect(database_url)
            .await;

        if let Err(ref e) = result {
            tracing::warn!(error = %e, "Database connection attempt failed");
        }

        result
    })
    .await?;

    Ok(pool)
}

/// Applies the embedded migrations in `./migrations`.
///
/// # Errors
///
/// Returns [`AppError::StorageUnavailable`] if a migration fails.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
