use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use webhook_history::modules::webhooks::use_cases::ingest_webhook::handler::IngestWebhookHandler;
use webhook_history::shared::infrastructure::event_history::EventHistoryStore;
use webhook_history::shared::infrastructure::event_history::json_file::JsonFileEventHistory;
use webhook_history::shell::config::Config;
use webhook_history::shell::http::{WEBHOOK_PATH, router};
use webhook_history::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let file_store = Arc::new(JsonFileEventHistory::new(
        config.events_file.clone(),
        config.retention,
    ));
    tracing::info!("Events will be saved to {}", file_store.path().display());
    let store: Arc<dyn EventHistoryStore> = file_store;
    let state = AppState {
        ingest_handler: Arc::new(IngestWebhookHandler::new(store, config.history_merge)),
    };
    let app = router(state, config.max_body_bytes);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Webhook endpoint: http://{}{}", addr, WEBHOOK_PATH);
    axum::serve(listener, app).await?;
    Ok(())
}
