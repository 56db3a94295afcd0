//! Public base URL derivation from HTTP request headers.

use axum::http::{HeaderMap, header};

/// Fallback host used when the request carries no usable `Host` header.
const FALLBACK_HOST: &str = "localhost";

/// Returns the base URL short links are built on.
///
/// A configured base URL always wins. Otherwise the request's `Host`
/// header (port included) is used as `http://<host>/`.
///
/// The result always ends with `/`, so `base + code` is a full short URL.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// assert_eq!(resolve_base_url(None, &headers), "http://sho.rt:8080/");
/// assert_eq!(resolve_base_url(Some("https://s.io"), &headers), "https://s.io/");
/// ```
pub fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(base) = configured {
        return with_trailing_slash(base);
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .unwrap_or(FALLBACK_HOST);

    format!("http://{}/", host)
}

/// Appends a trailing slash if missing.
pub fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    }
}
