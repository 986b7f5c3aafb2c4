//! Detail record describing a short link.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata stored under `shortlink:<code>:detail`.
///
/// Serialized as `{"url": ..., "create_at": ..., "expired": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlDetail {
    pub url: String,
    pub create_at: DateTime<Utc>,
    /// Requested lifetime in minutes. `0` means the record never expires.
    pub expired: i64,
}

impl UrlDetail {
    /// Creates a detail record stamped with the current time.
    pub fn new(url: impl Into<String>, expired: i64) -> Self {
        Self {
            url: url.into(),
            create_at: Utc::now(),
            expired,
        }
    }
}
