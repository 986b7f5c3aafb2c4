//! Utility functions for code encoding and URL hashing.
//!
//! - [`base62`] - Dense reversible encoding of counter values
//! - [`url_hash`] - Content hash used to deduplicate URLs

pub mod base62;
pub mod url_hash;
