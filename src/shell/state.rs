use crate::modules::webhooks::use_cases::ingest_webhook::handler::IngestWebhookHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub ingest_handler: Arc<IngestWebhookHandler>,
}
