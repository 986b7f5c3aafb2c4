//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

use crate::error::AppError;
use crate::state::AppState;

/// Shape of a code that can have been allocated: base62, at most 11 chars.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-zA-Z]{1,11}$").unwrap());

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Returns 307 Temporary Redirect so clients keep asking us; the mapping
/// can expire.
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed, unknown or expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    if !CODE_REGEX.is_match(&code) {
        return Err(AppError::not_found(
            "Unknown short URL",
            json!({ "code": code }),
        ));
    }

    let long_url = state.shortener.unshorten(&code).await?;

    Ok(Redirect::temporary(&long_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_regex() {
        assert!(CODE_REGEX.is_match("1"));
        assert!(CODE_REGEX.is_match("aZ09"));
        assert!(CODE_REGEX.is_match("LygHa16AHYF"));
        assert!(!CODE_REGEX.is_match("LygHa16AHYFx"));
        assert!(!CODE_REGEX.is_match("ab-c"));
        assert!(!CODE_REGEX.is_match("favicon.ico"));
    }
}
