pub mod auth_pages;
pub mod sections;
pub mod ui;
pub mod waitlist;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(ui::router())
        .nest("/api", waitlist::router())
}
