use crate::modules::webhooks::core::event::WebhookEvent;
use crate::modules::webhooks::core::history_merge::HistoryMerge;
use crate::shared::infrastructure::event_history::{EventHistoryError, EventHistoryStore};
use chrono::Utc;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

const PREVIEW_BYTES: usize = 500;

/// Display strings double as the `error` field of the HTTP response.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Empty request body")]
    EmptyPayload,

    #[error("{0}")]
    MalformedPayload(String),

    #[error(transparent)]
    Store(#[from] EventHistoryError),
}

pub struct IngestWebhookHandler {
    store: Arc<dyn EventHistoryStore>,
    merge: HistoryMerge,
    // Serializes load-append-save so concurrent deliveries do not drop each other.
    write_lock: Mutex<()>,
}

impl IngestWebhookHandler {
    pub fn new(store: Arc<dyn EventHistoryStore>, merge: HistoryMerge) -> Self {
        Self {
            store,
            merge,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn handle(
        &self,
        event_type: Option<&str>,
        body: &[u8],
    ) -> Result<WebhookEvent, IngestError> {
        if body.is_empty() {
            tracing::warn!("empty body received");
            return Err(IngestError::EmptyPayload);
        }
        tracing::debug!(body = %preview(body), "webhook body");

        let payload = decode(body).inspect_err(|err| {
            tracing::error!(error = %err, raw = %preview(body), "failed to decode webhook body");
        })?;

        let event = WebhookEvent::from_payload(event_type, &payload, Utc::now());
        tracing::info!(
            event_type = %event.event_type,
            action = event.action.as_deref().unwrap_or("none"),
            "event recorded"
        );

        let _guard = self.write_lock.lock().await;
        let mut events = if self.merge.loads_history_for(&event) {
            self.store.load().await?
        } else {
            tracing::info!("starting a fresh event history");
            Vec::new()
        };
        events.push(event.clone());
        self.store.save(events).await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to save event history");
        })?;

        Ok(event)
    }
}

fn decode(body: &[u8]) -> Result<Value, IngestError> {
    let text =
        std::str::from_utf8(body).map_err(|err| IngestError::MalformedPayload(err.to_string()))?;
    let payload: Value =
        serde_json::from_str(text).map_err(|err| IngestError::MalformedPayload(err.to_string()))?;
    if !payload.is_object() {
        return Err(IngestError::MalformedPayload(
            "payload must be a JSON object".into(),
        ));
    }
    Ok(payload)
}

/// First bytes of a body for log output; invalid UTF-8 is replaced.
pub fn preview(body: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(&body[..body.len().min(PREVIEW_BYTES)])
}
