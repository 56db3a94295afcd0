//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /shorten`     - Create (or return) a short URL
/// - `GET  /health`      - Storage health check
/// - `GET  /{short_id}`  - Redirect to the long URL
///
/// Static routes take precedence over the `/{short_id}` capture, so
/// `/health` and `/shorten` are never looked up as codes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{short_id}", get(redirect_handler))
}
