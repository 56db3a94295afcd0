//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{InsertConflict, InsertOutcome, UrlRepository};
use crate::error::AppError;

#[derive(Default)]
struct Table {
    by_code: HashMap<String, UrlRecord>,
    code_by_url: HashMap<String, String>,
    last_id: i64,
}

/// Process-local URL table.
///
/// Both uniqueness checks and the insert happen under one write lock, which
/// gives the same guarantees as the PostgreSQL constraints. Contents are
/// lost on restart.
#[derive(Default)]
pub struct MemoryUrlRepository {
    table: RwLock<Table>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let table = self.table.read().await;
        Ok(table.by_code.get(short_code).cloned())
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError> {
        let table = self.table.read().await;
        Ok(table
            .code_by_url
            .get(long_url)
            .and_then(|code| table.by_code.get(code))
            .cloned())
    }

    async fn insert(&self, new_record: NewUrlRecord) -> Result<InsertOutcome, AppError> {
        let mut table = self.table.write().await;

        if table.code_by_url.contains_key(&new_record.long_url) {
            return Ok(InsertOutcome::Conflict(InsertConflict::LongUrl));
        }
        if table.by_code.contains_key(&new_record.short_code) {
            return Ok(InsertOutcome::Conflict(InsertConflict::ShortCode));
        }

        table.last_id += 1;
        let record = UrlRecord::new(
            table.last_id,
            new_record.short_code,
            new_record.long_url,
            Utc::now(),
        );

        table
            .code_by_url
            .insert(record.long_url.clone(), record.short_code.clone());
        table
            .by_code
            .insert(record.short_code.clone(), record.clone());

        Ok(InsertOutcome::Inserted(record))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let table = self.table.read().await;
        Ok(table.by_code.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_record(code: &str, url: &str) -> NewUrlRecord {
        NewUrlRecord {
            short_code: code.to_string(),
            long_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = MemoryUrlRepository::new();

        let outcome = repo
            .insert(new_record("abc2345", "https://example.com"))
            .await
            .unwrap();
        let InsertOutcome::Inserted(record) = outcome else {
            panic!("expected the record to be inserted");
        };
        assert_eq!(record.id, 1);

        let by_code = repo.find_by_short_code("abc2345").await.unwrap();
        assert_eq!(by_code, Some(record.clone()));

        let by_url = repo.find_by_long_url("https://example.com").await.unwrap();
        assert_eq!(by_url, Some(record));

        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_lookup_is_exact() {
        let repo = MemoryUrlRepository::new();
        repo.insert(new_record("AbC2345", "https://example.com/Path"))
            .await
            .unwrap();

        assert!(repo.find_by_short_code("abc2345").await.unwrap().is_none());
        assert!(
            repo.find_by_long_url("https://example.com/path")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_short_code_conflict() {
        let repo = MemoryUrlRepository::new();
        repo.insert(new_record("abc2345", "https://one.example"))
            .await
            .unwrap();

        let outcome = repo
            .insert(new_record("abc2345", "https://two.example"))
            .await
            .unwrap();

        assert_eq!(outcome, InsertOutcome::Conflict(InsertConflict::ShortCode));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_long_url_conflict() {
        let repo = MemoryUrlRepository::new();
        repo.insert(new_record("abc2345", "https://one.example"))
            .await
            .unwrap();

        let outcome = repo
            .insert(new_record("def6789", "https://one.example"))
            .await
            .unwrap();

        assert_eq!(outcome, InsertOutcome::Conflict(InsertConflict::LongUrl));
        assert!(repo.find_by_short_code("def6789").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let repo = MemoryUrlRepository::new();

        let mut ids = Vec::new();
        for i in 0..5 {
            let outcome = repo
                .insert(new_record(&format!("code{i}"), &format!("https://e.x/{i}")))
                .await
                .unwrap();
            if let InsertOutcome::Inserted(record) = outcome {
                ids.push(record.id);
            }
        }

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
