//! Image SearchMate: keyword-driven image search across Pixabay and Unsplash
//!
//! This is the main entry point for the application.

use anyhow::Result;
use image_searchmate::{config, engines::EngineLoader, network::HttpClient, web};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting Image SearchMate v{}", image_searchmate::VERSION);

    // Load configuration
    let settings = config::load()?;

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized");

    // Load engines
    let registry = EngineLoader::load(&settings);
    if registry.is_empty() {
        tracing::warn!("No image engines enabled; searches will return no images");
    }

    // Create application state and router
    let state = web::AppState::new(&settings, registry, client);
    let app = web::create_router(state);

    // Bind address
    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
