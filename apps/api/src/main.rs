mod board;
mod config;
mod errors;
mod llm_client;
mod models;
mod provider;
mod routes;
mod search;
mod state;
mod tailoring;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::provider::llm::LlmProvider;
use crate::routes::build_router;
use crate::state::{AppState, Session};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobScout API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client and the providers built on it
    let llm = LlmClient::new(config.anthropic_api_key.clone(), config.llm_timeout_secs)?;
    let provider = Arc::new(LlmProvider::new(llm));
    info!("LLM provider initialized (model: {})", llm_client::MODEL);

    if config.user_email.is_none() {
        info!("USER_EMAIL not set; company alias emails are disabled");
    }

    // Build app state
    let state = AppState {
        config: config.clone(),
        session: Arc::new(Mutex::new(Session::new())),
        job_search: provider.clone(),
        refinement: provider.clone(),
        tailoring: provider,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the deployed front-end

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
