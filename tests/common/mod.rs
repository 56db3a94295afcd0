#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use short_url::AppError;
use short_url::config::Config;
use short_url::domain::entities::{NewUrlRecord, UrlRecord};
use short_url::domain::repositories::{InsertOutcome, UrlRepository};
use short_url::infrastructure::persistence::MemoryUrlRepository;
use short_url::state::AppState;
use short_url::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

/// Hands out the scripted codes in order, then falls back to random ones.
#[derive(Default)]
pub struct ScriptedCodeGenerator {
    codes: Mutex<VecDeque<String>>,
    fallback: RandomCodeGenerator,
}

impl ScriptedCodeGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            fallback: RandomCodeGenerator::default(),
        }
    }
}

impl CodeGenerator for ScriptedCodeGenerator {
    fn generate(&self) -> String {
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.generate())
    }
}

/// Always returns the same code.
pub struct ConstantCodeGenerator(pub &'static str);

impl CodeGenerator for ConstantCodeGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

/// A store whose every operation fails.
pub struct UnavailableRepository;

#[async_trait]
impl UrlRepository for UnavailableRepository {
    async fn find_by_short_code(&self, _: &str) -> Result<Option<UrlRecord>, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn find_by_long_url(&self, _: &str) -> Result<Option<UrlRecord>, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn insert(&self, _: NewUrlRecord) -> Result<InsertOutcome, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::storage("connection refused"))
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    create_test_state_with(
        Arc::new(RandomCodeGenerator::default()),
        &Config::default(),
    )
}

pub fn create_test_state_with(
    generator: Arc<dyn CodeGenerator>,
    config: &Config,
) -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let state = AppState::new(repository.clone(), generator, config);

    (state, repository)
}

pub async fn insert_record(repository: &MemoryUrlRepository, code: &str, url: &str) {
    let outcome = repository
        .insert(NewUrlRecord {
            short_code: code.to_string(),
            long_url: url.to_string(),
        })
        .await
        .unwrap();

    assert!(matches!(outcome, InsertOutcome::Inserted(_)));
}
