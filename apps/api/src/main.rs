use anyhow::Result;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_api::config::Config;
use resume_api::llm_client::{self, LlmClient};
use resume_api::routes::build_router;
use resume_api::state::AppState;
use resume_api::structuring::structurer::select_structurer;
use resume_api::structuring::taxonomy::TAXONOMY_VERSION;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting resume API v{} (taxonomy v{TAXONOMY_VERSION})",
        env!("CARGO_PKG_VERSION")
    );

    // Initialize LLM client only when AI structuring can actually run
    let llm = if config.ai_structuring_enabled() {
        let client = config
            .anthropic_api_key
            .clone()
            .map(|key| LlmClient::new(key, config.llm_settings()))
            .transpose()?;
        info!(
            timeout_secs = config.llm_timeout_secs,
            max_retries = config.llm_max_retries,
            "LLM client initialized (model: {})",
            llm_client::MODEL
        );
        client
    } else {
        info!("AI structuring disabled; heuristic engine only");
        None
    };

    let structurer = select_structurer(llm, config.enable_ai_structuring);

    let state = AppState {
        config: config.clone(),
        structurer,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
