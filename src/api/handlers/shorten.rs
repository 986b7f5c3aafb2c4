//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a URL, or returns the live one.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "expired": 60 }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "short_url": "1c" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body cannot be parsed or fails validation.
/// Returns 500 Internal Server Error on store failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let code = state
        .shortener
        .shorten(&payload.url, payload.expired)
        .await?;

    let link = state
        .base_url
        .as_deref()
        .map(|base| state.shortener.short_url(base, &code));

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: code,
            link,
        }),
    ))
}
