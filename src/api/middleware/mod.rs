//! HTTP middleware for request processing.
//!
//! Provides request tracing and panic recovery.

pub mod recovery;
pub mod tracing;
