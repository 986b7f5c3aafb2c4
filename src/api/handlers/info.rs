//! Handler for the link detail endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::info::InfoQuery;
use crate::domain::entities::UrlDetail;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the detail record of a short code.
///
/// # Endpoint
///
/// `GET /api/info?shortUrl={code}`
///
/// # Response
///
/// ```json
/// {
///   "url": "https://example.com",
///   "create_at": "2024-05-01T10:00:00Z",
///   "expired": 60
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `shortUrl` is missing or empty.
/// Returns 404 Not Found if the code is unknown or expired.
pub async fn info_handler(
    State(state): State<AppState>,
    Query(query): Query<InfoQuery>,
) -> Result<Json<UrlDetail>, AppError> {
    let code = query
        .short_url
        .filter(|c| !c.is_empty())
        .ok_or_else(|| {
            AppError::bad_request(
                "Missing shortUrl parameter",
                json!({ "field": "shortUrl" }),
            )
        })?;

    let detail = state.shortener.shorten_info(&code).await?;

    Ok(Json(detail))
}
