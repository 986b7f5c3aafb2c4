//! Redis-backed store implementation.

use crate::domain::store::{KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisResult, aio::ConnectionManager};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Redis store for short link records.
///
/// Uses a `ConnectionManager` for connection reuse and reconnects. Every
/// command runs under a per-call deadline; errors are propagated to the
/// caller unchanged and never retried.
pub struct RedisStore {
    client: ConnectionManager,
    timeout: Duration,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://127.0.0.1:6379/0"`)
    /// - `timeout` - Deadline applied to each command round-trip; controlled via
    ///   the `STORE_TIMEOUT_MS` env var
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConnectionError`] if the URL is invalid, the connection
    /// cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, timeout: Duration) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = tokio::time::timeout(timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Timeout(timeout))?
            .map_err(|e| {
                StoreError::ConnectionError(format!("Failed to connect to Redis: {}", e))
            })?;

        let store = Self {
            client: manager,
            timeout,
        };

        let mut conn = store.client.clone();
        store
            .with_deadline("PING", conn.ping::<()>())
            .await
            .map_err(|e| StoreError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(store)
    }

    /// Awaits a Redis command, bounded by the configured deadline.
    async fn with_deadline<T, F>(&self, command: &'static str, fut: F) -> StoreResult<T>
    where
        F: Future<Output = RedisResult<T>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(StoreError::OperationError(format!(
                "Redis {} failed: {}",
                command, e
            ))),
            Err(_) => Err(StoreError::Timeout(self.timeout)),
        }
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();
        let value = self
            .with_deadline("GET", conn.get::<_, Option<String>>(key))
            .await?;

        debug!("Redis GET {} -> {}", key, if value.is_some() { "hit" } else { "miss" });
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> StoreResult<()> {
        let mut conn = self.client.clone();

        match ttl {
            Some(ttl) => {
                self.with_deadline("SETEX", conn.set_ex::<_, _, ()>(key, value, ttl.as_secs()))
                    .await?
            }
            None => {
                self.with_deadline("SET", conn.set::<_, _, ()>(key, value))
                    .await?
            }
        }

        debug!("Redis SET {} (TTL: {:?})", key, ttl);
        Ok(())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut conn = self.client.clone();
        self.with_deadline("INCR", conn.incr::<_, _, i64>(key, 1))
            .await
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        self.with_deadline("PING", conn.ping::<()>()).await.is_ok()
    }
}
