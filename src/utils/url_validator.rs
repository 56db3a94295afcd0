//! Long URL validation.
//!
//! URLs are checked, never rewritten: the stored value is exactly what the
//! client submitted, so deduplication is a byte-for-byte comparison.

use crate::error::AppError;

/// Schemes a long URL may start with. Matched case-sensitively.
pub const ACCEPTED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Default upper bound on long URL length, in bytes.
pub const DEFAULT_MAX_URL_LENGTH: usize = 2048;

pub const MISSING_URL_MESSAGE: &str = "Missing 'url' parameter";
pub const INVALID_SCHEME_MESSAGE: &str = "URL must start with http:// or https://";
pub const CONTROL_CHARACTER_MESSAGE: &str = "URL must not contain control characters";

/// Validates a long URL before it is persisted.
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] if the URL is empty, does not start
/// with `http://` or `https://`, is longer than `max_length` bytes, or
/// contains ASCII control characters (which cannot appear in a `Location`
/// header).
pub fn validate_long_url(long_url: &str, max_length: usize) -> Result<(), AppError> {
    if long_url.is_empty() {
        return Err(AppError::invalid_input(MISSING_URL_MESSAGE));
    }

    if !ACCEPTED_SCHEMES
        .iter()
        .any(|scheme| long_url.starts_with(scheme))
    {
        return Err(AppError::invalid_input(INVALID_SCHEME_MESSAGE));
    }

    if long_url.len() > max_length {
        return Err(AppError::invalid_input(format!(
            "URL must not exceed {} characters",
            max_length
        )));
    }

    if long_url.chars().any(|c| c.is_ascii_control()) {
        return Err(AppError::invalid_input(CONTROL_CHARACTER_MESSAGE));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(url: &str) -> Result<(), AppError> {
        validate_long_url(url, DEFAULT_MAX_URL_LENGTH)
    }

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate("http://example.com").is_ok());
        assert!(validate("https://example.com/a?b=c#d").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        let err = validate("").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(err.to_string(), MISSING_URL_MESSAGE);
    }

    #[test]
    fn test_rejects_other_schemes() {
        for url in ["ftp://example.com", "javascript:alert(1)", "example.com", "//example.com"] {
            let err = validate(url).unwrap_err();
            assert_eq!(err.to_string(), INVALID_SCHEME_MESSAGE, "{url}");
        }
    }

    #[test]
    fn test_scheme_match_is_case_sensitive() {
        assert!(validate("HTTPS://example.com").is_err());
    }

    #[test]
    fn test_rejects_control_characters() {
        for url in ["https://example.com/\r\nSet-Cookie: x", "https://exa\tmple.com", "https://e.x/\0"] {
            let err = validate(url).unwrap_err();
            assert_eq!(err.to_string(), CONTROL_CHARACTER_MESSAGE);
        }
    }

    #[test]
    fn test_accepts_non_ascii() {
        assert!(validate("https://例え.jp/パス").is_ok());
    }

    #[test]
    fn test_rejects_overlong_url() {
        let url = format!("https://example.com/{}", "a".repeat(40));
        assert!(validate_long_url(&url, url.len()).is_ok());

        let err = validate_long_url(&url, url.len() - 1).unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }
}
