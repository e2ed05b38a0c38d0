use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::USER_AGENT},
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
};

#[derive(Deserialize)]
struct JoinPayload {
    #[serde(default)]
    email: Option<String>,
}

#[derive(Serialize)]
struct JoinResponse {
    success: bool,
    message: String,
    id: Uuid,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join).fallback(method_not_allowed))
}

async fn join(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<JoinPayload>,
) -> AppResult<impl IntoResponse> {
    let email = payload.email.unwrap_or_default();
    let ip_address = client_ip(&headers);
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let id = app_state
        .waitlist_use_cases
        .join(&email, &ip_address, user_agent)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(JoinResponse {
            success: true,
            message: "Email added to waitlist successfully".to_string(),
            id,
        }),
    ))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Best-effort client address: first `x-forwarded-for` hop, then
/// `x-real-ip`, then `"unknown"`.
fn client_ip(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for")
        && let Ok(val) = forwarded.to_str()
        && let Some(first) = val.split(',').next()
    {
        let trimmed = first.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    if let Some(real) = headers.get("x-real-ip")
        && let Ok(val) = real.to_str()
        && !val.trim().is_empty()
    {
        return val.trim().to_string();
    }
    "unknown".to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::test_utils::{InMemoryWaitlistRepo, test_app_state};

    use super::*;

    fn test_server(repo: Arc<InMemoryWaitlistRepo>) -> TestServer {
        TestServer::new(router().with_state(test_app_state(repo))).unwrap()
    }

    #[tokio::test]
    async fn get_returns_405_with_fixed_body() {
        let server = test_server(Arc::new(InMemoryWaitlistRepo::new()));

        let response = server.get("/waitlist").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        response.assert_json(&json!({ "error": "Method not allowed" }));
    }

    #[tokio::test]
    async fn invalid_emails_return_400_and_write_nothing() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let server = test_server(repo.clone());

        for bad in ["", "notanemail", "@nodomain.com", "user@nodot", "a b@c.com"] {
            let response = server.post("/waitlist").json(&json!({ "email": bad })).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({ "error": "Valid email is required" }));
        }

        assert!(repo.entries().is_empty());
    }

    #[tokio::test]
    async fn missing_email_field_returns_400() {
        let server = test_server(Arc::new(InMemoryWaitlistRepo::new()));

        let response = server.post("/waitlist").json(&json!({})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Valid email is required" }));
    }

    #[tokio::test]
    async fn successful_signup_returns_201_with_id() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let server = test_server(repo.clone());

        let response = server
            .post("/waitlist")
            .json(&json!({ "email": "user@example.com" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["message"], json!("Email added to waitlist successfully"));
        assert!(body["id"].as_str().unwrap().parse::<Uuid>().is_ok());

        assert_eq!(repo.entries().len(), 1);
    }

    #[tokio::test]
    async fn email_is_stored_trimmed_and_lowercased() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let server = test_server(repo.clone());

        let response = server
            .post("/waitlist")
            .json(&json!({ "email": " Foo@BAR.com " }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(repo.entries()[0].email, "foo@bar.com");
    }

    #[tokio::test]
    async fn duplicate_email_returns_409_and_keeps_one_entry() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let server = test_server(repo.clone());

        let first = server
            .post("/waitlist")
            .json(&json!({ "email": "user@example.com" }))
            .await;
        first.assert_status(StatusCode::CREATED);

        let second = server
            .post("/waitlist")
            .json(&json!({ "email": "User@Example.com" }))
            .await;
        second.assert_status(StatusCode::CONFLICT);
        second.assert_json(&json!({ "error": "Email already registered" }));

        assert_eq!(repo.entries().len(), 1);
    }

    #[tokio::test]
    async fn request_metadata_is_recorded() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let server = test_server(repo.clone());

        server
            .post("/waitlist")
            .add_header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
            .add_header("x-real-ip", "198.51.100.2")
            .add_header("user-agent", "waitlist-test/1.0")
            .json(&json!({ "email": "forwarded@example.com" }))
            .await;

        server
            .post("/waitlist")
            .add_header("x-real-ip", "198.51.100.2")
            .json(&json!({ "email": "real-ip@example.com" }))
            .await;

        server
            .post("/waitlist")
            .json(&json!({ "email": "bare@example.com" }))
            .await;

        let entries = repo.entries();
        assert_eq!(entries[0].ip_address, "203.0.113.9");
        assert_eq!(entries[0].user_agent, "waitlist-test/1.0");
        assert_eq!(entries[1].ip_address, "198.51.100.2");
        assert_eq!(entries[2].ip_address, "unknown");
        assert_eq!(entries[2].user_agent, "unknown");
    }

    #[tokio::test]
    async fn store_outage_returns_503() {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        repo.set_unavailable(true);
        let server = test_server(repo);

        let response = server
            .post("/waitlist")
            .json(&json!({ "email": "user@example.com" }))
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        response.assert_json(&json!({ "error": "Database connection failed" }));
    }
}
