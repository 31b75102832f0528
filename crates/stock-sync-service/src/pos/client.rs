//! POS API client implementation.

use std::time::Duration;

use reqwest::Client;

use stock_sync_core::{OrderId, ProductId, VendorId};

use super::types::{PosSyncRequest, PosSyncResponse};

/// Error type for POS operations.
#[derive(Debug, thiserror::Error)]
pub enum PosError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The POS service answered with a non-success status.
    #[error("POS API error: HTTP {status}")]
    Api {
        /// HTTP status code.
        status: u16,
    },

    /// The POS service answered 200 but reported `success: false`.
    #[error("POS system rejected order {order_id}")]
    Rejected {
        /// The order the POS system refused.
        order_id: OrderId,
    },
}

/// POS API client.
#[derive(Debug, Clone)]
pub struct PosClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl PosClient {
    /// Create a new POS client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - POS service URL (e.g., `"http://localhost:3000"`)
    /// * `api_key` - shared-secret key forwarded with every request
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Register an order with the POS system.
    ///
    /// Returns `Ok(())` only when the POS service answered 200 with
    /// `{"success": true}`; every other outcome is an error and the caller
    /// must not touch local inventory.
    ///
    /// # Errors
    ///
    /// - `PosError::Http` if the request could not be sent.
    /// - `PosError::Api` on a non-success HTTP status.
    /// - `PosError::Rejected` if the POS system reported failure.
    pub async fn sync_order(
        &self,
        product_id: &ProductId,
        vendor_id: &VendorId,
        quantity: i64,
        order_id: &OrderId,
    ) -> Result<(), PosError> {
        let url = format!("{}/api/pos/sync", self.base_url);
        let request = PosSyncRequest {
            product_id: product_id.clone(),
            vendor_id: vendor_id.clone(),
            quantity,
            order_id: *order_id,
        };

        let mut builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request);

        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key);
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PosError::Api {
                status: status.as_u16(),
            });
        }

        let body: PosSyncResponse = response.json().await?;
        if !body.success {
            return Err(PosError::Rejected {
                order_id: *order_id,
            });
        }

        Ok(())
    }
}
