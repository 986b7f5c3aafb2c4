//! Storage capability trait and error types.

use async_trait::async_trait;
use std::time::Duration;

/// Errors that can occur while talking to the key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    ConnectionError(String),
    #[error("Store operation error: {0}")]
    OperationError(String),
    #[error("Store operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal key-value capability the shortening engine depends on.
///
/// Any store with per-key TTLs and an atomic counter can back the engine.
/// Errors are returned as-is; implementations must not retry internally.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Production Redis backend
/// - [`crate::infrastructure::store::MemoryStore`] - In-process store for tests and local runs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads a value.
    ///
    /// Returns `Ok(None)` when the key was never written or has expired.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes a value, overwriting any previous one.
    ///
    /// The TTL starts at write time. `None` stores the key without expiry.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> StoreResult<()>;

    /// Atomically increments an integer counter and returns the new value.
    ///
    /// A missing key counts as zero.
    async fn incr(&self, key: &str) -> StoreResult<i64>;

    /// Checks if the store is reachable.
    async fn health_check(&self) -> bool;
}
