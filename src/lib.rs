//! # kv-shortener
//!
//! A URL shortener that hands out sequential base62 codes and keeps every
//! mapping in Redis with a per-link expiry.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Detail record, key schema and the store trait
//! - **Application Layer** ([`application`]) - The shortening engine
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## How Codes Are Made
//!
//! Each new URL increments the `next.url.id` counter in the store and the
//! new value is rendered in base62 (`1`, `2`, ... `Z`, `10`, ...). A SHA-256
//! index of the URL returns the existing code for repeated requests until
//! the link expires.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! cargo run
//!
//! curl -X POST localhost:3000/api/shorten \
//!      -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com", "expired": 60}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::UrlDetail;
    pub use crate::domain::store::{KeyValueStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
