use std::sync::Arc;

use ai_chat_relay::config::RelayConfig;
use ai_chat_relay::llm::{ChatCompletion, OpenAiClient};
use ai_chat_relay::routes;
use ai_chat_relay::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = RelayConfig::from_env();

    // Missing credential is non-fatal: the server boots and each chat
    // request answers with a configuration error.
    let llm: Option<Arc<dyn ChatCompletion>> = match OpenAiClient::from_config(&config)
        .expect("HTTP client build failed")
    {
        Some(client) => {
            tracing::info!(model = %config.model, "OpenAI client initialized");
            Some(Arc::new(client))
        }
        None => {
            tracing::warn!("OPENAI_API_KEY not set — chat requests will return a configuration error");
            None
        }
    };

    let state = AppState::new(llm);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "ai-chat relay listening");
    axum::serve(listener, app).await.expect("server failed");
}
