//! Short link allocation and resolution.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::UrlDetail;
use crate::domain::keys;
use crate::domain::store::KeyValueStore;
use crate::error::AppError;
use crate::utils::base62;
use crate::utils::url_hash::url_hash;

/// Largest accepted expiry, 100 years.
const MAX_EXPIRE_MINUTES: i64 = 100 * 365 * 24 * 60;

/// The shortening engine.
///
/// Codes are base62 renderings of a counter kept in the store, and repeated
/// requests for the same URL are answered from a hash index while the first
/// mapping is alive. The service holds no state of its own, so any number of
/// instances can share one store.
///
/// Two concurrent calls for the same new URL may both miss the hash index and
/// receive different codes. Both codes stay valid; the hash index ends up
/// pointing at whichever was written last.
pub struct ShortenerService {
    store: Arc<dyn KeyValueStore>,
}

impl ShortenerService {
    /// Creates a new shortener on top of `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Shortens `url`, keeping the records for `expire_minutes` minutes.
    ///
    /// # Deduplication
    ///
    /// If the same URL string was shortened before and its records have not
    /// expired, the existing code is returned and nothing is written.
    ///
    /// # Expiry
    ///
    /// `expire_minutes == 0` stores the records without a TTL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `url` is blank, contains control
    /// characters (it could not be sent back in a `Location` header), or
    /// `expire_minutes` is negative or too large. Returns [`AppError::Internal`] on store errors.
    /// A failure after the counter was incremented leaves that ID unused.
    pub async fn shorten(&self, url: &str, expire_minutes: i64) -> Result<String, AppError> {
        if url.trim().is_empty() {
            return Err(AppError::bad_request(
                "URL must not be empty",
                json!({ "field": "url" }),
            ));
        }
        if let Some(position) = url.find(char::is_control) {
            return Err(AppError::bad_request(
                "URL must not contain control characters",
                json!({ "field": "url", "position": position }),
            ));
        }
        let ttl = expiry_ttl(expire_minutes)?;

        let hash = url_hash(url);
        if let Some(code) = self.store.get(&keys::url_hash(&hash)).await? {
            debug!("Dedup HIT: {} -> {}", url, code);
            return Ok(code);
        }
        debug!("Dedup MISS: {}", url);

        let id = self.store.incr(keys::NEXT_URL_ID).await?;
        let id = u64::try_from(id).ok().filter(|id| *id > 0).ok_or_else(|| {
            AppError::internal(
                "Invalid link counter value",
                json!({ "key": keys::NEXT_URL_ID, "value": id }),
            )
        })?;
        let code = base62::encode(id);

        let detail = serde_json::to_string(&UrlDetail::new(url, expire_minutes)).map_err(|e| {
            AppError::internal(
                "Failed to encode link detail",
                json!({ "reason": e.to_string() }),
            )
        })?;

        self.store.set(&keys::short_link(&code), url, ttl).await?;
        self.store.set(&keys::url_hash(&hash), &code, ttl).await?;
        self.store
            .set(&keys::short_link_detail(&code), &detail, ttl)
            .await?;

        info!(code = %code, id, expire_minutes, "Short link created");

        Ok(code)
    }

    /// Returns the detail record of a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never allocated or has
    /// expired. Returns [`AppError::Internal`] on store errors or if the stored
    /// record cannot be decoded.
    pub async fn shorten_info(&self, code: &str) -> Result<UrlDetail, AppError> {
        let raw = self
            .store
            .get(&keys::short_link_detail(code))
            .await?
            .ok_or_else(|| unknown_code(code))?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::internal(
                "Corrupted link detail",
                json!({ "code": code, "reason": e.to_string() }),
            )
        })
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never allocated or has
    /// expired. Returns [`AppError::Internal`] on store errors.
    pub async fn unshorten(&self, code: &str) -> Result<String, AppError> {
        self.store
            .get(&keys::short_link(code))
            .await?
            .ok_or_else(|| unknown_code(code))
    }

    /// Reads the last allocated link ID without incrementing it.
    ///
    /// Returns `Ok(None)` if nothing has been shortened yet.
    pub async fn last_allocated_id(&self) -> Result<Option<i64>, AppError> {
        let Some(raw) = self.store.get(keys::NEXT_URL_ID).await? else {
            return Ok(None);
        };

        raw.parse().map(Some).map_err(|_| {
            AppError::internal(
                "Invalid link counter value",
                json!({ "key": keys::NEXT_URL_ID, "value": raw }),
            )
        })
    }

    /// Constructs the public short URL from a base URL and code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}

fn unknown_code(code: &str) -> AppError {
    AppError::not_found("Unknown short URL", json!({ "code": code }))
}

/// Maps the requested lifetime to a store TTL.
fn expiry_ttl(expire_minutes: i64) -> Result<Option<Duration>, AppError> {
    match expire_minutes {
        0 => Ok(None),
        1..=MAX_EXPIRE_MINUTES => Ok(Some(Duration::from_secs(expire_minutes as u64 * 60))),
        _ => Err(AppError::bad_request(
            "Expiry must be between 0 and the maximum supported number of minutes",
            json!({ "field": "expired", "value": expire_minutes, "max": MAX_EXPIRE_MINUTES }),
        )),
    }
}
