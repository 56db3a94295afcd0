//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See `tests/repository_url.rs` for the PostgreSQL implementation and
//! `tests/handler_*.rs` for end-to-end usage over the in-memory store.

pub mod url_repository;

pub use url_repository::{InsertConflict, InsertOutcome, UrlRepository};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
