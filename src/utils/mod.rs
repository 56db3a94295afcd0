//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Long URL validation
//! - [`base_url`] - Public base URL derivation from HTTP headers
//! - [`db_error`] - Constraint violation classification

pub mod base_url;
pub mod code_generator;
pub mod db_error;
pub mod url_validator;
