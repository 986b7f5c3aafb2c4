//! Key schema for records kept in the key-value store.
//!
//! The layout is shared by every instance pointed at the same store, so it
//! must stay stable across releases.

/// Global counter used to allocate short link IDs.
pub const NEXT_URL_ID: &str = "next.url.id";

/// `shortLink:<code>:url` holds the original URL.
pub fn short_link(code: &str) -> String {
    format!("shortLink:{code}:url")
}

/// `urlhash:<sha256>:url` holds the code previously assigned to a URL.
pub fn url_hash(hash: &str) -> String {
    format!("urlhash:{hash}:url")
}

/// `shortlink:<code>:detail` holds the JSON detail record.
pub fn short_link_detail(code: &str) -> String {
    format!("shortlink:{code}:detail")
}
