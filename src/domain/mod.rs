//! Domain layer: the data model and the storage contract of the shortener.
//!
//! Nothing in here knows about HTTP or about a concrete store.
//!
//! # Architecture
//!
//! - [`entities`] - Records persisted per short code
//! - [`keys`] - Key schema shared by every store implementation
//! - [`store`] - The [`store::KeyValueStore`] capability trait
//!
//! # Record Lifecycle
//!
//! A short code is `unallocated` until the global counter hands it out,
//! `active` while its keys are alive in the store, and `expired` once the
//! store's TTL has removed them. The engine never deletes or sweeps keys.

pub mod entities;
pub mod keys;
pub mod store;
