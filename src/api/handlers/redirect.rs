//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// Responds with **302 Found** and the stored URL, unmodified, in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found with `{"error": "Short URL not found"}` if the code
/// was never issued.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = state.lookup.resolve(&short_id).await?;

    tracing::debug!(short_id = %short_id, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response())
}
