use std::{env, net::SocketAddr};

use axum::http::HeaderValue;
use url::Url;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub cors_origin: HeaderValue,
    /// Base origin of the external auth API the login/register/verification
    /// screens talk to. That API's contract is owned elsewhere; this service
    /// only injects the origin into the rendered pages.
    pub auth_api_origin: Url,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or("127.0.0.1:3000".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let cors_origin: HeaderValue = env::var("CORS_ORIGIN")
            .unwrap_or("http://localhost:3000".to_string())
            .parse()
            .expect("CORS_ORIGIN must be a valid header value");

        let auth_api_origin: Url = env::var("AUTH_API_ORIGIN")
            .unwrap_or("http://localhost:8000".to_string())
            .parse()
            .expect("AUTH_API_ORIGIN must be a valid URL");

        Self {
            bind_addr,
            database_url,
            cors_origin,
            auth_api_origin,
        }
    }
}
