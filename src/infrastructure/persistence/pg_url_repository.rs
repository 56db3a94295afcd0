//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{InsertOutcome, UrlRepository};
use crate::error::AppError;
use crate::utils::db_error::unique_violation_conflict;

/// PostgreSQL repository for URL records.
///
/// Uniqueness of `short_code` and `long_url` is enforced by the
/// `urls_short_code_key` and `urls_long_url_key` constraints; every method
/// is a single statement, so a cancelled request never leaves a partial row.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, short_code, long_url, created_at
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, short_code, long_url, created_at
            FROM urls
            WHERE long_url = $1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn insert(&self, new_record: NewUrlRecord) -> Result<InsertOutcome, AppError> {
        let result = sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (short_code, long_url)
            VALUES ($1, $2)
            RETURNING id, short_code, long_url, created_at
            "#,
        )
        .bind(&new_record.short_code)
        .bind(&new_record.long_url)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(record) => Ok(InsertOutcome::Inserted(record)),
            Err(e) => match unique_violation_conflict(&e) {
                Some(conflict) => Ok(InsertOutcome::Conflict(conflict)),
                None => Err(e.into()),
            },
        }
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
