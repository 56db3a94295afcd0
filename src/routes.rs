//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Informational page
//! - `POST /shorten`     - Create a short URL
//! - `GET  /health`      - Storage health check
//! - `GET  /{short_id}`  - Short URL redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .merge(api::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service, trimming trailing slashes before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
