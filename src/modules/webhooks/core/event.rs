use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

pub const UNKNOWN_EVENT_TYPE: &str = "unknown";
pub const COMPLETED_ACTION: &str = "completed";

/// Normalized record of one webhook delivery.
///
/// Field order is the on-disk key order. Absent values are written as `null`,
/// never omitted, so consumers can rely on a fixed key set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookEvent {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub event_type: String,
    pub action: Option<String>,
    pub workflow_run: Option<Value>,
    pub check_run: Option<Value>,
    pub repository: Option<String>,
    pub sender: Option<String>,
}

impl WebhookEvent {
    /// Extract the tracked fields from a decoded payload. Missing or
    /// mistyped structure resolves to `None` instead of failing.
    pub fn from_payload(
        event_type: Option<&str>,
        payload: &Value,
        received_at: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp: received_at,
            event_type: event_type.unwrap_or(UNKNOWN_EVENT_TYPE).to_string(),
            action: string_at(payload, &["action"]),
            workflow_run: passthrough(payload, "workflow_run"),
            check_run: passthrough(payload, "check_run"),
            repository: string_at(payload, &["repository", "full_name"]),
            sender: string_at(payload, &["sender", "login"]),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.action.as_deref() == Some(COMPLETED_ACTION)
    }
}

/// RFC 3339, or an ISO-8601 timestamp without offset read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp {raw:?}")))
}

fn string_at(payload: &Value, path: &[&str]) -> Option<String> {
    path.iter()
        .try_fold(payload, |value, key| value.get(*key))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

fn passthrough(payload: &Value, key: &str) -> Option<Value> {
    payload.get(key).filter(|value| !value.is_null()).cloned()
}
