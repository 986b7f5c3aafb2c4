//! In-process store implementation.

use crate::domain::store::{KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry as MapEntry;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expire_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expire_at.is_some_and(|expire_at| now >= expire_at)
    }
}

/// A key-value store that keeps everything in memory.
///
/// Used by tests and for running the service without Redis. Expiry is
/// measured with the Tokio clock, so tests can pause and advance time.
/// Expired keys are dropped lazily when they are next touched.
#[derive(Debug, Default)]
pub struct MemoryStore {
    storage: DashMap<String, Entry>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryStore");
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of keys that have not yet expired.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.storage.iter().filter(|e| !e.is_expired(now)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let now = Instant::now();

        let Some(entry) = self.storage.get(key) else {
            return Ok(None);
        };

        if entry.is_expired(now) {
            drop(entry);
            self.storage.remove_if(key, |_, e| e.is_expired(now));
            return Ok(None);
        }

        Ok(Some(entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> StoreResult<()> {
        let entry = Entry {
            value: value.to_string(),
            expire_at: ttl.map(|ttl| Instant::now() + ttl),
        };

        self.storage.insert(key.to_string(), entry);
        Ok(())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let now = Instant::now();

        // The entry guard holds the shard lock, which makes read-modify-write atomic.
        match self.storage.entry(key.to_string()) {
            MapEntry::Occupied(mut occupied) => {
                let current = if occupied.get().is_expired(now) {
                    0
                } else {
                    occupied.get().value.parse::<i64>().map_err(|_| {
                        StoreError::OperationError(format!(
                            "value at {} is not an integer",
                            key
                        ))
                    })?
                };

                let next = current.checked_add(1).ok_or_else(|| {
                    StoreError::OperationError(format!("increment at {} would overflow", key))
                })?;

                let entry = occupied.get_mut();
                if entry.is_expired(now) {
                    entry.expire_at = None;
                }
                entry.value = next.to_string();
                Ok(next)
            }
            MapEntry::Vacant(vacant) => {
                vacant.insert(Entry {
                    value: "1".to_string(),
                    expire_at: None,
                });
                Ok(1)
            }
        }
    }

    async fn health_check(&self) -> bool {
        true
    }
}
