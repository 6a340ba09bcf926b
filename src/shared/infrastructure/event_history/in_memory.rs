// In memory implementation of the EventHistoryStore port.
//
// Purpose
// - Support handler and router tests without touching the filesystem.
//
// Responsibilities
// - Hold the history behind an async lock.
// - Apply the same retention rule as the file-backed store.

use crate::modules::webhooks::core::event::WebhookEvent;
use crate::shared::infrastructure::event_history::{
    DEFAULT_RETENTION, EventHistoryError, EventHistoryStore, retain_latest,
};
use tokio::sync::RwLock;

pub struct InMemoryEventHistory {
    events: RwLock<Vec<WebhookEvent>>,
    retention: usize,
    is_offline: bool,
}

impl Default for InMemoryEventHistory {
    fn default() -> Self {
        Self::new(DEFAULT_RETENTION)
    }
}

impl InMemoryEventHistory {
    pub fn new(retention: usize) -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            retention,
            is_offline: false,
        }
    }

    pub fn with_events(retention: usize, events: Vec<WebhookEvent>) -> Self {
        Self {
            events: RwLock::new(events),
            retention,
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn snapshot(&self) -> Vec<WebhookEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait::async_trait]
impl EventHistoryStore for InMemoryEventHistory {
    async fn load(&self) -> Result<Vec<WebhookEvent>, EventHistoryError> {
        if self.is_offline {
            return Err(EventHistoryError::Backend("Event history offline".into()));
        }
        Ok(self.events.read().await.clone())
    }

    async fn save(&self, events: Vec<WebhookEvent>) -> Result<(), EventHistoryError> {
        if self.is_offline {
            return Err(EventHistoryError::Backend("Event history offline".into()));
        }
        *self.events.write().await = retain_latest(events, self.retention);
        Ok(())
    }
}
