use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, StatusCode, header::CONTENT_LENGTH},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::webhooks::core::event::UNKNOWN_EVENT_TYPE;
use crate::shell::state::AppState;

pub const EVENT_TYPE_HEADER: &str = "x-github-event";

#[derive(Serialize)]
pub struct ReceivedResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Every failure is reported as a 400 with a JSON `error` body.
fn bad_request(error: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let event_type = headers
        .get(EVENT_TYPE_HEADER)
        .and_then(|value| value.to_str().ok());
    let content_length = headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("0");

    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(
                event_type = event_type.unwrap_or(UNKNOWN_EVENT_TYPE),
                content_length,
                error = %rejection,
                "could not read webhook body"
            );
            return bad_request(rejection.body_text());
        }
    };

    tracing::info!(
        event_type = event_type.unwrap_or(UNKNOWN_EVENT_TYPE),
        content_length,
        body_size = body.len(),
        "incoming webhook"
    );

    match state.ingest_handler.handle(event_type, &body).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ReceivedResponse { status: "received" }),
        )
            .into_response(),
        Err(err) => bad_request(err.to_string()),
    }
}
