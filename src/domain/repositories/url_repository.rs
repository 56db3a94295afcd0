//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Which uniqueness constraint rejected an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertConflict {
    /// Another record already owns the candidate short code.
    ShortCode,
    /// Another record already maps the same long URL.
    LongUrl,
}

/// Result of an insert attempt.
///
/// Uniqueness violations are ordinary outcomes here, not errors: the
/// allocator retries on [`InsertConflict::ShortCode`] and re-reads on
/// [`InsertConflict::LongUrl`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(UrlRecord),
    Conflict(InsertConflict),
}

/// Repository interface for the single table of URL records.
///
/// Implementations must enforce uniqueness of both `short_code` and
/// `long_url` atomically with the insert and report violations
/// synchronously.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a record by its exact (case-sensitive) short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record whose long URL matches byte-for-byte.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Inserts a new record.
    ///
    /// # Returns
    ///
    /// - `Ok(InsertOutcome::Inserted(record))` with the stored record
    /// - `Ok(InsertOutcome::Conflict(_))` if a uniqueness constraint rejected it;
    ///   nothing is written in that case
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<InsertOutcome, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Verifies that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if it is not.
    async fn ping(&self) -> Result<(), AppError>;
}
