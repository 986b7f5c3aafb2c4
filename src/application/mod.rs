//! Application layer services implementing business logic.
//!
//! Services orchestrate store calls and validation and give the HTTP handlers
//! and the admin CLI a single entry point.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Short link allocation and resolution

pub mod services;
