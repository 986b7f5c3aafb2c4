//! API route configuration.

use crate::api::handlers::{health_handler, info_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create (or reuse) a short link
/// - `GET  /info`    - Detail record of a short code (`?shortUrl=`)
/// - `GET  /health`  - Store health check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/info", get(info_handler))
        .route("/health", get(health_handler))
}
