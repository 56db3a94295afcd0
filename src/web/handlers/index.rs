//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::HeaderMap, response::IntoResponse};

use crate::state::AppState;
use crate::utils::base_url::resolve_base_url;

/// Template for the home page.
///
/// Renders `templates/index.html` with usage instructions for the API.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub version: &'static str,
    pub base_url: String,
}

/// Renders the informational home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    IndexTemplate {
        version: env!("CARGO_PKG_VERSION"),
        base_url: resolve_base_url(state.base_url.as_deref(), &headers),
    }
}
