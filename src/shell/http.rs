use axum::{Router, extract::DefaultBodyLimit, routing::post};
use tower_http::trace::TraceLayer;

use crate::modules::webhooks::use_cases::ingest_webhook::inbound::http as ingest_http;
use crate::shell::state::AppState;

pub const WEBHOOK_PATH: &str = "/webhook/github";

pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(ingest_http::handle))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
