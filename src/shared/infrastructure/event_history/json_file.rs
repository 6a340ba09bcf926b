// JSON file implementation of the EventHistoryStore port.
//
// Responsibilities
// - Read the history array from a single file, treating absent, empty or
//   unparsable content as an empty history.
// - Write the truncated history pretty-printed to a sibling temp file and
//   rename it over the target, so readers never observe a partial write.

use crate::modules::webhooks::core::event::WebhookEvent;
use crate::shared::infrastructure::event_history::{
    EventHistoryError, EventHistoryStore, retain_latest,
};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct JsonFileEventHistory {
    path: PathBuf,
    retention: usize,
}

impl JsonFileEventHistory {
    pub fn new(path: impl Into<PathBuf>, retention: usize) -> Self {
        Self {
            path: path.into(),
            retention,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{}.tmp", std::process::id()));
        PathBuf::from(name)
    }
}

#[async_trait::async_trait]
impl EventHistoryStore for JsonFileEventHistory {
    async fn load(&self) -> Result<Vec<WebhookEvent>, EventHistoryError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "event history does not exist yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        if bytes.is_empty() {
            tracing::info!(path = %self.path.display(), "event history is empty");
            return Ok(Vec::new());
        }

        match serde_json::from_slice::<Vec<WebhookEvent>>(&bytes) {
            Ok(events) => {
                tracing::info!(path = %self.path.display(), count = events.len(), "loaded event history");
                Ok(events)
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "event history is corrupted, starting fresh"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, events: Vec<WebhookEvent>) -> Result<(), EventHistoryError> {
        let events = retain_latest(events, self.retention);
        let bytes = serde_json::to_vec_pretty(&events)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, bytes).await?;
        if let Err(err) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(err.into());
        }

        tracing::info!(path = %self.path.display(), count = events.len(), "saved event history");
        Ok(())
    }
}
