use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Valid email is required")]
    InvalidEmail,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Database connection failed: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => AppError::Unavailable(err.to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}
