use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{is_valid_email, normalize_email},
};

/// A signup ready to be stored: email already trimmed and lowercased.
#[derive(Debug, Clone)]
pub struct NewWaitlistEntry {
    pub email: String,
    pub ip_address: String,
    pub user_agent: String,
}

/// A stored signup as read back from the repository.
#[derive(Debug, Clone)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub ip_address: String,
    pub user_agent: String,
}

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Inserts one entry and returns its id. The store's unique email
    /// index is the duplicate detector: a violation surfaces as
    /// [`AppError::EmailTaken`].
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<Uuid>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    /// Validates and stores a waitlist signup, returning the new entry id.
    #[instrument(skip(self))]
    pub async fn join(
        &self,
        email: &str,
        ip_address: &str,
        user_agent: &str,
    ) -> AppResult<Uuid> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(AppError::InvalidEmail);
        }

        self.repo
            .insert(&NewWaitlistEntry {
                email,
                ip_address: ip_address.to_string(),
                user_agent: user_agent.to_string(),
            })
            .await
    }
}
