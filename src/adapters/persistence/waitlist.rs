use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    use_cases::waitlist::{NewWaitlistEntry, WaitlistRepo},
};

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO waitlist_entries (id, email, ip_address, user_agent)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(&entry.email)
        .bind(&entry.ip_address)
        .bind(&entry.user_agent)
        .execute(&self.pool)
        .await
        .map_err(|err| match &err {
            // The unique email index doubles as the duplicate check.
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::EmailTaken,
            _ => AppError::from(err),
        })?;
        Ok(id)
    }
}
