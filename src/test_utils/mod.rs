//! Test utilities: in-memory repository mocks and app-state builders for
//! HTTP-level tests.

use std::sync::{Arc, Mutex};

use axum::http::HeaderValue;
use async_trait::async_trait;
use chrono::Utc;
use url::Url;
use uuid::Uuid;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    infra::config::AppConfig,
    use_cases::waitlist::{NewWaitlistEntry, WaitlistEntry, WaitlistRepo, WaitlistUseCases},
};

/// In-memory waitlist store enforcing the same unique-email rule as the
/// Postgres index.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    entries: Mutex<Vec<WaitlistEntry>>,
    unavailable: Mutex<bool>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the store being unreachable.
    pub fn set_unavailable(&self, value: bool) {
        *self.unavailable.lock().unwrap() = value;
    }

    pub fn entries(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<Uuid> {
        if *self.unavailable.lock().unwrap() {
            return Err(AppError::Unavailable("connection refused".to_string()));
        }

        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.email == entry.email) {
            return Err(AppError::EmailTaken);
        }

        let id = Uuid::new_v4();
        entries.push(WaitlistEntry {
            id,
            email: entry.email.clone(),
            created_at: Utc::now(),
            ip_address: entry.ip_address.clone(),
            user_agent: entry.user_agent.clone(),
        });
        Ok(id)
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        database_url: "postgres://unused".to_string(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        auth_api_origin: Url::parse("http://localhost:8000").unwrap(),
    }
}

pub fn test_app_state(repo: Arc<InMemoryWaitlistRepo>) -> AppState {
    AppState {
        config: Arc::new(test_config()),
        waitlist_use_cases: Arc::new(WaitlistUseCases::new(repo as Arc<dyn WaitlistRepo>)),
    }
}
