//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - API key authentication middleware
//! - Request extractors

pub mod middleware;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use centavo_core::store::LedgerStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared account store and transaction log.
    pub store: Arc<dyn LedgerStore>,
    /// Pause between the funds check and the debit while screening runs.
    pub compliance_hold: Duration,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
