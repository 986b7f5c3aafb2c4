//! Infrastructure layer for external integrations.
//!
//! Provides the concrete implementations of [`crate::domain::store::KeyValueStore`].
//!
//! # Modules
//!
//! - [`store`] - Redis and in-memory key-value stores

pub mod store;
