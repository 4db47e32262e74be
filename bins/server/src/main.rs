//! Mediagate API Server
//!
//! Main entry point for the image upload gateway.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use mediagate_api::{AppState, create_router};
use mediagate_core::asset::AssetService;
use mediagate_core::store::{StoreClient, StoreConfig};
use mediagate_shared::{AppConfig, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(config.logging.format);

    // Create asset store client
    let store_config = StoreConfig::from(config.store.clone());
    info!(
        cloud_name = %store_config.cloud_name,
        api_base_url = %store_config.api_base_url,
        "Asset store configured"
    );
    let store = StoreClient::new(store_config).context("Failed to build asset store client")?;

    // Create application state
    let assets = AssetService::new(Arc::new(store), config.upload.default_max_size);
    let state = AppState::new(assets);

    // Create router
    let app = create_router(state, config.upload.body_limit_bytes);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mediagate=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
