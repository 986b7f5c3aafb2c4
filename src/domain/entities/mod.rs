//! Records persisted alongside each short code.

pub mod url_detail;

pub use url_detail::UrlDetail;
