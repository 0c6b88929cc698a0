mod config;
mod errors;
mod export;
mod llm_client;
mod models;
mod portfolio;
mod routes;
mod safety;
mod state;
mod theme;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{LlmBackend, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
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

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (optional: AI features stay off without a key)
    let llm: Option<Arc<dyn LlmBackend>> = match &config.anthropic_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), config.llm_api_url.clone())
                .context("Failed to build LLM client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(client) as Arc<dyn LlmBackend>)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; remote synthesis and AI assistant disabled");
            None
        }
    };

    info!(
        "Default synthesis backend: {:?} (simulated latency: {})",
        config.synthesis_backend, config.simulate_latency
    );
    info!(
        "AI rate limit: {} requests per {}s",
        config.ai_rate_limit_max,
        config.ai_rate_limit_window.as_secs()
    );

    // Build app state
    let state = AppState::new(config.clone(), llm);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the editor has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
