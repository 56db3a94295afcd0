//! Repository implementations and database setup.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - PostgreSQL storage using SQLx
//! - [`MemoryUrlRepository`] - In-process table, used when no database is
//!   configured and in tests
//!
//! # Setup
//!
//! - [`pool::connect`] - Connection pool with startup retries
//! - [`pool::run_migrations`] - Embedded schema migrations

pub mod memory_url_repository;
pub mod pg_url_repository;
pub mod pool;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
