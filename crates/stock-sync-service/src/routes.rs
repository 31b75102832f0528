//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, inventory, portal, sync};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
///
/// ## Sync (shared-secret auth)
/// - `POST /api/sync/refill` - Apply a stock refill
/// - `POST /api/sync/audit` - Apply a stock audit
/// - `POST /api/sync/sale` - Apply a sale
///
/// ## Inventory (shared-secret auth)
/// - `GET /api/inventory/:productId` - Vendor records with stock remaining
///
/// ## Portal (shared-secret auth)
/// - `POST /api/portal/purchaseproduct` - Purchase, forwarded to the POS peer
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    // Build CORS layer
    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    Router::new()
        // Health (public)
        .route("/health", get(health::health))
        // Sync
        .route("/api/sync/refill", post(sync::refill))
        .route("/api/sync/audit", post(sync::audit))
        .route("/api/sync/sale", post(sync::sale))
        // Inventory
        .route("/api/inventory/:productId", get(inventory::get_inventory))
        // Portal
        .route(
            "/api/portal/purchaseproduct",
            post(portal::purchase_product),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
