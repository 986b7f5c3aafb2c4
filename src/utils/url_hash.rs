//! Content hash of a URL, used as the deduplication key.

use sha2::{Digest, Sha256};

/// Returns the hex-encoded SHA-256 digest of `url`.
///
/// The URL is hashed byte for byte; no normalization is applied, so two
/// spellings of the same address get separate codes.
pub fn url_hash(url: &str) -> String {
    hex::encode(Sha256::digest(url.as_bytes()))
}
