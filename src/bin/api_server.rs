// API Server Binary Entry Point
//
// Purpose: Serve practice area pages and the JSON API with Axum
// Usage: cargo run --features api --bin api_server

use practice_catalog::{AppState, SiteConfig, create_router};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "practice_catalog=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = SiteConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  FIRM_NAME: {}", config.firm_name);
    tracing::info!("  SITE_BASE_URL: {}", config.base_url);
    tracing::info!("  PORT: {}", config.port);

    // Builds and validates the registry; a bad catalog stops startup here
    let state = AppState::new(&config)?;
    tracing::info!("Application state initialized successfully");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
