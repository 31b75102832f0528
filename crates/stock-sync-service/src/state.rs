//! Application state.

use std::sync::Arc;

use stock_sync_store::RocksStore;

use crate::config::ServiceConfig;
use crate::pos::PosClient;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend.
    pub store: Arc<RocksStore>,

    /// Service configuration.
    pub config: ServiceConfig,

    /// POS client used to forward purchases.
    pub pos: Arc<PosClient>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<RocksStore>, config: ServiceConfig) -> Self {
        if config.api_key.is_none() {
            tracing::warn!("API_KEY not configured - all /api requests will be rejected");
        }
        if config.pos_api_key.is_none() {
            tracing::warn!("POS_API_KEY not configured - POS requests will carry no credential");
        }

        let pos = Arc::new(PosClient::new(
            config.pos_server_url.clone(),
            config.pos_api_key.clone(),
        ));
        tracing::info!(pos_url = %config.pos_server_url, "POS integration configured");

        Self { store, config, pos }
    }
}
