//! Short code allocation service.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{InsertConflict, InsertOutcome, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::{DEFAULT_MAX_URL_LENGTH, validate_long_url};

/// Default number of insert attempts before giving up on collisions.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Result of [`AllocatorService::allocate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub record: UrlRecord,
    /// `false` when the URL had already been shortened.
    pub created: bool,
}

/// Service that assigns short codes to long URLs.
///
/// Allocation is idempotent per long URL: the same input always yields the
/// same short code. Code collisions are retried with a fresh candidate, and
/// a concurrent insert of the same URL resolves to the record that won.
pub struct AllocatorService {
    repository: Arc<dyn UrlRepository>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: u32,
    max_url_length: usize,
}

impl AllocatorService {
    /// Creates an allocator with default limits.
    pub fn new(repository: Arc<dyn UrlRepository>, generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            repository,
            generator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_url_length: DEFAULT_MAX_URL_LENGTH,
        }
    }

    /// Sets the number of insert attempts made before failing with
    /// [`AppError::AllocationExhausted`]. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Sets the maximum accepted long URL length in bytes.
    pub fn with_max_url_length(mut self, max_url_length: usize) -> Self {
        self.max_url_length = max_url_length;
        self
    }

    /// Returns the short code for `long_url`, creating one if needed.
    ///
    /// # Flow
    ///
    /// 1. Validate the URL
    /// 2. Return the existing record if the URL was already shortened
    /// 3. Generate a candidate and insert it
    /// 4. On a short code collision, retry with a new candidate
    /// 5. On a long URL conflict, return the concurrently created record
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] if the URL is empty, has an unsupported
    ///   scheme or is too long
    /// - [`AppError::AllocationExhausted`] if every attempt collided
    /// - [`AppError::StorageUnavailable`] on storage failures
    pub async fn allocate(&self, long_url: &str) -> Result<Allocation, AppError> {
        validate_long_url(long_url, self.max_url_length)?;

        if let Some(existing) = self.repository.find_by_long_url(long_url).await? {
            tracing::debug!(short_code = %existing.short_code, "URL already shortened");
            return Ok(Allocation {
                record: existing,
                created: false,
            });
        }

        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.generate();

            let outcome = self
                .repository
                .insert(NewUrlRecord {
                    short_code: candidate.clone(),
                    long_url: long_url.to_string(),
                })
                .await?;

            match outcome {
                InsertOutcome::Inserted(record) => {
                    tracing::info!(short_code = %record.short_code, attempt, "Short URL created");
                    return Ok(Allocation {
                        record,
                        created: true,
                    });
                }
                InsertOutcome::Conflict(InsertConflict::ShortCode) => {
                    tracing::warn!(
                        short_code = %candidate,
                        attempt,
                        max_attempts = self.max_attempts,
                        "Short code collision, retrying"
                    );
                }
                InsertOutcome::Conflict(InsertConflict::LongUrl) => {
                    return self.existing_after_conflict(long_url).await;
                }
            }
        }

        tracing::error!(
            attempts = self.max_attempts,
            "Short code space exhausted: every candidate collided"
        );

        Err(AppError::AllocationExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Reads back the record another request inserted for `long_url`.
    async fn existing_after_conflict(&self, long_url: &str) -> Result<Allocation, AppError> {
        let record = self
            .repository
            .find_by_long_url(long_url)
            .await?
            .ok_or_else(|| {
                AppError::storage("Long URL conflict reported but no record was found")
            })?;

        tracing::debug!(
            short_code = %record.short_code,
            "URL shortened concurrently, returning existing code"
        );

        Ok(Allocation {
            record,
            created: false,
        })
    }
}
