//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored mapping between a short code and a long URL
//! - [`NewUrlRecord`] - Input for inserting a new mapping

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
