//! Common test utilities for stock-sync integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use stock_sync_service::{create_router, AppState, ServiceConfig};
use stock_sync_store::RocksStore;

/// Shared secret used by all tests.
pub const API_KEY: &str = "test-api-key";

/// Shared secret the service forwards to the POS peer.
pub const POS_API_KEY: &str = "test-pos-key";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with a fresh database.
    ///
    /// The POS URL points nowhere; tests that exercise purchases should
    /// use [`TestHarness::with_pos_url`] with a wiremock server.
    pub fn new() -> Self {
        Self::with_pos_url("http://localhost:59999")
    }

    /// Create a harness whose POS client targets the given base URL.
    pub fn with_pos_url(pos_url: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = RocksStore::open(temp_dir.path()).expect("Failed to open store");

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            data_dir: temp_dir.path().to_string_lossy().to_string(),
            api_key: Some(API_KEY.to_string()),
            pos_server_url: pos_url.to_string(),
            pos_api_key: Some(POS_API_KEY.to_string()),
            environment: "test".into(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(Arc::new(store), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            _temp_dir: temp_dir,
        }
    }

    /// Seed a record via the refill endpoint and return the response body.
    pub async fn seed_refill(
        &self,
        product_id: &str,
        vendor_id: &str,
        quantity: i64,
    ) -> serde_json::Value {
        let response = self
            .server
            .post("/api/sync/refill")
            .add_header("x-api-key", API_KEY)
            .json(&serde_json::json!({
                "productId": product_id,
                "vendorId": vendor_id,
                "quantity": quantity,
                "timestamp": "2024-05-01T12:00:00Z"
            }))
            .await;

        response.assert_status_ok();
        response.json()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
