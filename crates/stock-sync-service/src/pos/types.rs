//! Wire types for the POS sync endpoint.

use serde::{Deserialize, Serialize};

use stock_sync_core::{OrderId, ProductId, VendorId};

/// Request body for `POST /api/pos/sync`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PosSyncRequest {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Vendor the stock is drawn from.
    pub vendor_id: VendorId,
    /// Units purchased.
    pub quantity: i64,
    /// Locally generated order identifier.
    pub order_id: OrderId,
}

/// Response body from the POS service.
#[derive(Debug, Clone, Deserialize)]
pub struct PosSyncResponse {
    /// Whether the POS system accepted the order.
    pub success: bool,
}
