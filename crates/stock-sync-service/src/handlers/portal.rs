//! Customer portal handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use stock_sync_core::{InventoryRecord, OrderId, ProductId, VendorId};
use stock_sync_store::Store;

use crate::auth::ApiKey;
use crate::error::ApiError;
use crate::state::AppState;

/// Purchase request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Vendor the stock is drawn from.
    pub vendor_id: VendorId,
    /// Units purchased.
    pub quantity: i64,
}

/// Purchase response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The order identifier registered with the POS system.
    pub order_id: OrderId,
    /// The updated inventory record.
    pub inventory: InventoryRecord,
    /// Human-readable confirmation.
    pub message: String,
}

/// Purchase a product through the portal.
///
/// The POS notification happens strictly before the local decrement: a POS
/// failure never leaves local stock reduced. The reverse gap (POS success,
/// local store failure) is accepted and surfaced as an error-level log.
pub async fn purchase_product(
    State(state): State<Arc<AppState>>,
    _auth: ApiKey,
    Json(body): Json<PurchaseRequest>,
) -> Result<Json<PurchaseResponse>, ApiError> {
    if body.quantity <= 0 {
        return Err(ApiError::BadRequest(
            "purchase quantity must be positive".into(),
        ));
    }

    // Advisory pre-check. The guarded decrement below is what actually
    // enforces availability; this read exists to fail fast with the
    // current stock level before the POS system hears about the order.
    let available = state
        .store
        .get(&body.product_id, &body.vendor_id)?
        .map_or(0, |record| record.quantity_available);
    if available < body.quantity {
        return Err(ApiError::InsufficientStock {
            available,
            requested: body.quantity,
        });
    }

    let order_id = OrderId::generate();

    state
        .pos
        .sync_order(&body.product_id, &body.vendor_id, body.quantity, &order_id)
        .await
        .map_err(|e| {
            tracing::error!(
                order_id = %order_id,
                product_id = %body.product_id,
                vendor_id = %body.vendor_id,
                error = %e,
                "POS sync failed, purchase aborted"
            );
            ApiError::from(e)
        })?;

    // Purchases stamp server time, unlike the sync endpoints which trust
    // the caller's timestamp.
    let inventory = state
        .store
        .purchase(
            &body.product_id,
            &body.vendor_id,
            body.quantity,
            &order_id,
            Utc::now(),
        )
        .map_err(|e| {
            // The order is registered upstream but local stock was not
            // reduced. Monitored condition, not silently swallowed. This
            // covers losing a race after the advisory check passed too:
            // the POS already accepted the order by then.
            tracing::error!(
                order_id = %order_id,
                product_id = %body.product_id,
                vendor_id = %body.vendor_id,
                error = %e,
                "Local inventory update failed after POS success; systems diverged"
            );
            ApiError::from(e)
        })?;

    tracing::info!(
        order_id = %order_id,
        product_id = %body.product_id,
        vendor_id = %body.vendor_id,
        quantity = %body.quantity,
        remaining = %inventory.quantity_available,
        "Purchase completed"
    );

    Ok(Json(PurchaseResponse {
        success: true,
        order_id,
        inventory,
        message: "Purchase successful".to_string(),
    }))
}
