//! JSON API: handlers, DTOs and HTTP middleware.
//!
//! - [`handlers`] - Request handlers
//! - [`dto`] - Request and response bodies
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
