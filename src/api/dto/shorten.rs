//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};

pub const ALREADY_SHORTENED_MESSAGE: &str = "URL already shortened";

/// Request to shorten a URL.
///
/// `url` is optional at the JSON level so that a missing field produces the
/// same validation error as an empty one.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,
}

/// Response for a shortened URL.
///
/// `message` is only present when the URL had already been shortened.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_id: String,
    pub short_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_with_missing_url() {
        let request: ShortenRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.url.is_none());

        let request: ShortenRequest = serde_json::from_value(json!({ "url": null })).unwrap();
        assert!(request.url.is_none());
    }

    #[test]
    fn test_response_omits_message_when_created() {
        let response = ShortenResponse {
            short_id: "aB3dE5f".to_string(),
            short_url: "http://localhost/aB3dE5f".to_string(),
            message: None,
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "short_id": "aB3dE5f", "short_url": "http://localhost/aB3dE5f" })
        );
    }
}
