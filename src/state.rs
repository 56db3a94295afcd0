//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AllocatorService, LookupService};
use crate::config::Config;
use crate::domain::repositories::UrlRepository;
use crate::utils::base_url::with_trailing_slash;
use crate::utils::code_generator::CodeGenerator;

/// Services and settings shared by all request handlers.
///
/// Built once at startup by [`crate::server::run`]; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub allocator: Arc<AllocatorService>,
    pub lookup: Arc<LookupService>,
    pub repository: Arc<dyn UrlRepository>,
    /// Configured public prefix for short URLs, always ending with `/`.
    pub base_url: Option<String>,
}

impl AppState {
    /// Wires the services around a repository and a code generator.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        generator: Arc<dyn CodeGenerator>,
        config: &Config,
    ) -> Self {
        let allocator = AllocatorService::new(repository.clone(), generator)
            .with_max_attempts(config.max_allocation_attempts)
            .with_max_url_length(config.max_url_length);

        Self {
            allocator: Arc::new(allocator),
            lookup: Arc::new(LookupService::new(repository.clone())),
            repository,
            base_url: config.base_url.as_deref().map(with_trailing_slash),
        }
    }
}
