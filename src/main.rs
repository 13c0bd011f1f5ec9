use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use sehlabot::config::AppConfig;
use sehlabot::handlers;
use sehlabot::services::ai::openai::OpenAiProvider;
use sehlabot::services::intent::KeywordTable;
use sehlabot::services::unmatched_log::LogStore;
use sehlabot::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    if config.openai_api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set, unmatched messages will get the apology reply");
    }

    let keywords = match &config.keywords_path {
        Some(path) => {
            tracing::info!("loading keyword table from {path}");
            KeywordTable::from_yaml_file(path)?
        }
        None => KeywordTable::default(),
    };
    tracing::info!(
        intents = ?keywords.intents().map(|i| i.as_str()).collect::<Vec<_>>(),
        "keyword table ready"
    );

    let unmatched_log = LogStore::open(&config.log_path).await?;
    tracing::info!("logging unmatched messages to {}", unmatched_log.path().display());

    let llm = OpenAiProvider::new(
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        config.openai_url.clone(),
        Duration::from_secs(config.openai_timeout_secs),
    )?;
    tracing::info!("using completion model {}", config.openai_model);

    let state = Arc::new(AppState {
        llm: Box::new(llm),
        keywords,
        unmatched_log,
    });

    let app = Router::new()
        .route("/", get(handlers::health::health))
        .route("/webhook", post(handlers::webhook::message_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("SehlaBot running on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
