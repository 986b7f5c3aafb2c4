//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`       - Short link redirect
//! - `POST /api/shorten`  - Create a short link
//! - `GET  /api/info`     - Short link details
//! - `GET  /api/health`   - Health check of the store
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Recovery** - Panics become `500` responses
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::redirect_handler;
use crate::api::middleware::{recovery, tracing};
use crate::api::routes::api_routes;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and middleware without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(recovery::layer())
        .layer(tracing::layer())
}
