//! DTOs for the link detail endpoint.

use serde::Deserialize;

/// Query string of `GET /api/info`.
#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    #[serde(rename = "shortUrl")]
    pub short_url: Option<String>,
}
