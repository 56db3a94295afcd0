//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and the code generator and provide
//! a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::allocator_service::AllocatorService`] - Short code allocation
//! - [`services::lookup_service::LookupService`] - Short code resolution

pub mod services;
