//! Short code resolution service.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Longest short code the service can ever issue.
pub const MAX_SHORT_CODE_LENGTH: usize = 16;

pub const NOT_FOUND_MESSAGE: &str = "Short URL not found";

/// Service that resolves short codes back to their long URLs.
pub struct LookupService {
    repository: Arc<dyn UrlRepository>,
}

impl LookupService {
    /// Creates a new lookup service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Returns the long URL stored for `short_code`, unmodified.
    ///
    /// Matching is exact and case-sensitive. Codes that could never have been
    /// issued are rejected without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    /// Returns [`AppError::StorageUnavailable`] on storage failures.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        if short_code.is_empty() || short_code.len() > MAX_SHORT_CODE_LENGTH {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }

        self.repository
            .find_by_short_code(short_code)
            .await?
            .map(|record| record.long_url)
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
    }
}
