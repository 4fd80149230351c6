mod ai;
mod auth;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod resumes;
mod routes;
mod state;
mod uploads;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ai::ContentGenerator;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

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

    info!("Starting resumecraft API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&db).await?;
    info!("Migrations applied");

    // Initialize the generation proxy. Without a key the proxy serves
    // deterministic fallback content for every request.
    let generator = match config.gemini_api_key.clone() {
        Some(key) => {
            info!("Gemini client initialized (model: {})", llm_client::MODEL);
            ContentGenerator::new(Some(Arc::new(GeminiClient::new(key))))
        }
        None => {
            info!("GEMINI_API_KEY not set, generation runs in fallback-only mode");
            ContentGenerator::new(None)
        }
    };

    // Build app state
    let state = AppState {
        db,
        generator,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
