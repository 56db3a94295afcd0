//! Classification of PostgreSQL constraint violations.

use crate::domain::repositories::InsertConflict;

/// Unique constraint on `urls.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "urls_short_code_key";

/// Unique constraint on `urls.long_url`.
pub const LONG_URL_CONSTRAINT: &str = "urls_long_url_key";

/// Maps a unique violation on the `urls` table to the conflicting key.
///
/// Returns `None` for any other error, including unique violations on
/// constraints this service does not know about.
pub fn unique_violation_conflict(e: &sqlx::Error) -> Option<InsertConflict> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    constraint_conflict(db_err.constraint()?)
}

fn constraint_conflict(constraint: &str) -> Option<InsertConflict> {
    match constraint {
        SHORT_CODE_CONSTRAINT => Some(InsertConflict::ShortCode),
        LONG_URL_CONSTRAINT => Some(InsertConflict::LongUrl),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_names_map_to_conflicts() {
        assert_eq!(
            constraint_conflict("urls_short_code_key"),
            Some(InsertConflict::ShortCode)
        );
        assert_eq!(
            constraint_conflict("urls_long_url_key"),
            Some(InsertConflict::LongUrl)
        );
        assert_eq!(constraint_conflict("urls_pkey"), None);
    }

    #[test]
    fn test_non_database_errors_are_not_conflicts() {
        assert_eq!(unique_violation_conflict(&sqlx::Error::RowNotFound), None);
        assert_eq!(unique_violation_conflict(&sqlx::Error::PoolTimedOut), None);
    }
}
