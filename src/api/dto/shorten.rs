//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,

    /// Lifetime of the short link in minutes. `0` (the default) keeps it forever.
    #[serde(default)]
    #[validate(range(min = 0, message = "Expiry must not be negative"))]
    pub expired: i64,
}

/// Response for a created (or reused) short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// The short code.
    pub short_url: String,

    /// Full short link, present when `BASE_URL` is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
