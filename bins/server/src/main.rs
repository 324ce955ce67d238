//! Centavo API Server
//!
//! Main entry point for the Centavo ledger service.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use centavo_api::{AppState, create_router};
use centavo_shared::AppConfig;
use centavo_store::{MemoryStore, seed_accounts};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "centavo=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Create and seed the in-memory store
    let store = Arc::new(MemoryStore::new());
    let accounts = seed_accounts(&store);
    info!(accounts = accounts.len(), "Store seeded");

    // Create application state
    let state = AppState {
        store,
        compliance_hold: Duration::from_millis(config.ledger.compliance_hold_ms),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
