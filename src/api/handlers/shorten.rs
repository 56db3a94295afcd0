//! Handler for the shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};

use crate::api::dto::shorten::{ALREADY_SHORTENED_MESSAGE, ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::resolve_base_url;

pub const INVALID_BODY_MESSAGE: &str = "Request body must be a JSON object";

/// Creates a short URL, or returns the existing one.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// **201 Created** for a new mapping:
///
/// ```json
/// { "short_id": "aB3dE5f", "short_url": "http://localhost:3000/aB3dE5f" }
/// ```
///
/// **200 OK** if the URL was already shortened, with
/// `"message": "URL already shortened"` added.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, `url` is missing or
/// empty, or the scheme is not `http://` / `https://`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected shorten request body");
        AppError::invalid_input(INVALID_BODY_MESSAGE)
    })?;

    let long_url = payload.url.unwrap_or_default();
    let allocation = state.allocator.allocate(&long_url).await?;

    let short_id = allocation.record.short_code;
    let short_url = format!(
        "{}{}",
        resolve_base_url(state.base_url.as_deref(), &headers),
        short_id
    );

    let (status, message) = if allocation.created {
        (StatusCode::CREATED, None)
    } else {
        (StatusCode::OK, Some(ALREADY_SHORTENED_MESSAGE.to_string()))
    };

    Ok((
        status,
        Json(ShortenResponse {
            short_id,
            short_url,
            message,
        }),
    ))
}
