use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app_error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        let (status, message) = match &self {
            AppError::InvalidEmail => (StatusCode::BAD_REQUEST, "Valid email is required"),
            AppError::EmailTaken => (StatusCode::CONFLICT, "Email already registered"),
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
            }
            AppError::Unavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "Database connection failed")
            }
            AppError::Database(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
