use crate::modules::webhooks::core::event::WebhookEvent;
use async_trait::async_trait;
use thiserror::Error;

pub const DEFAULT_RETENTION: usize = 100;

#[derive(Debug, Error)]
pub enum EventHistoryError {
    #[error("history i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("history serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Bounded, arrival-ordered history of webhook events.
///
/// `load` never fails on unreadable content: a corrupt history is reported
/// as empty. `save` keeps only the newest events up to the retention limit
/// and replaces whatever was stored before.
#[async_trait]
pub trait EventHistoryStore: Send + Sync {
    async fn load(&self) -> Result<Vec<WebhookEvent>, EventHistoryError>;
    async fn save(&self, events: Vec<WebhookEvent>) -> Result<(), EventHistoryError>;
}

/// Drop events from the front until at most `limit` remain.
pub fn retain_latest<E>(mut events: Vec<E>, limit: usize) -> Vec<E> {
    if events.len() > limit {
        events.drain(..events.len() - limit);
    }
    events
}

pub mod in_memory;
pub mod json_file;
