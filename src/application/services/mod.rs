//! Business logic services for the application layer.

pub mod allocator_service;
pub mod lookup_service;

pub use allocator_service::{Allocation, AllocatorService};
pub use lookup_service::LookupService;
