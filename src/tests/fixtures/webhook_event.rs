// Shared builder for WebhookEvent values in tests.

use crate::modules::webhooks::core::event::WebhookEvent;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{Value, json};

pub struct WebhookEventBuilder {
    inner: WebhookEvent,
}

impl Default for WebhookEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WebhookEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: WebhookEvent {
                timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
                event_type: "workflow_run".to_string(),
                action: Some("completed".to_string()),
                workflow_run: Some(json!({ "id": 1 })),
                check_run: None,
                repository: Some("org/repo".to_string()),
                sender: Some("alice".to_string()),
            },
        }
    }

    /// Distinguishes events in a synthetic history: shifts the timestamp by
    /// `n` seconds and stamps `workflow_run.id` with `n`.
    pub fn sequence(mut self, n: u64) -> Self {
        self.inner.timestamp += Duration::seconds(n as i64);
        self.inner.workflow_run = Some(json!({ "id": n }));
        self
    }

    pub fn timestamp(mut self, v: DateTime<Utc>) -> Self {
        self.inner.timestamp = v;
        self
    }

    pub fn event_type(mut self, v: impl Into<String>) -> Self {
        self.inner.event_type = v.into();
        self
    }

    pub fn action(mut self, v: Option<&str>) -> Self {
        self.inner.action = v.map(str::to_owned);
        self
    }

    pub fn workflow_run(mut self, v: Option<Value>) -> Self {
        self.inner.workflow_run = v;
        self
    }

    pub fn check_run(mut self, v: Option<Value>) -> Self {
        self.inner.check_run = v;
        self
    }

    pub fn repository(mut self, v: Option<&str>) -> Self {
        self.inner.repository = v.map(str::to_owned);
        self
    }

    pub fn sender(mut self, v: Option<&str>) -> Self {
        self.inner.sender = v.map(str::to_owned);
        self
    }

    pub fn build(self) -> WebhookEvent {
        self.inner
    }
}

pub fn make_history(len: usize) -> Vec<WebhookEvent> {
    (0..len as u64)
        .map(|n| WebhookEventBuilder::new().sequence(n).build())
        .collect()
}

#[cfg(test)]
mod webhook_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let event = WebhookEventBuilder::new()
            .event_type("check_run")
            .action(None)
            .workflow_run(None)
            .check_run(Some(json!({ "id": 2 })))
            .repository(None)
            .sender(Some("bob"))
            .build();

        assert_eq!(event.event_type, "check_run");
        assert_eq!(event.action, None);
        assert_eq!(event.workflow_run, None);
        assert_eq!(event.check_run, Some(json!({ "id": 2 })));
        assert_eq!(event.repository, None);
        assert_eq!(event.sender.as_deref(), Some("bob"));
    }

    #[rstest]
    fn make_history_produces_distinct_events_in_order() {
        let history = make_history(3);
        assert_eq!(history.len(), 3);
        assert!(history.windows(2).all(|pair| pair[0].timestamp < pair[1].timestamp));
        assert_eq!(history[2].workflow_run, Some(json!({ "id": 2 })));
    }
}
