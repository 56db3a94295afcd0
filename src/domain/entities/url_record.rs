//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a short code and the original URL.
///
/// Records are immutable once created. `id` is a storage-internal surrogate
/// key and is never exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, short_code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
        }
    }
}

/// Input data for inserting a new record.
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let now = Utc::now();
        let record = UrlRecord::new(
            1,
            "aB3dE5f".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.short_code, "aB3dE5f");
        assert_eq!(record.long_url, "https://example.com");
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_new_url_record_creation() {
        let new_record = NewUrlRecord {
            short_code: "xyz789a".to_string(),
            long_url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_record.short_code, "xyz789a");
        assert_eq!(new_record.long_url, "https://rust-lang.org");
    }
}
