//! Inventory sync handlers: refill, audit, and sale.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stock_sync_core::{InventoryRecord, ProductId, VendorId};
use stock_sync_store::Store;

use crate::auth::ApiKey;
use crate::error::ApiError;
use crate::state::AppState;

/// Response for all sync mutations.
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The updated inventory record.
    pub inventory: InventoryRecord,
}

/// Refill request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefillRequest {
    /// Product to refill.
    pub product_id: ProductId,
    /// Vendor holding the stock.
    pub vendor_id: VendorId,
    /// Units added by the refill.
    pub quantity: i64,
    /// When the refill happened at the vendor.
    pub timestamp: DateTime<Utc>,
}

/// Apply a stock refill. Creates the record on first contact (upsert).
pub async fn refill(
    State(state): State<Arc<AppState>>,
    _auth: ApiKey,
    Json(body): Json<RefillRequest>,
) -> Result<Json<SyncResponse>, ApiError> {
    if body.quantity <= 0 {
        return Err(ApiError::BadRequest(
            "refill quantity must be positive".into(),
        ));
    }

    let inventory =
        state
            .store
            .refill(&body.product_id, &body.vendor_id, body.quantity, body.timestamp)?;

    tracing::info!(
        product_id = %body.product_id,
        vendor_id = %body.vendor_id,
        quantity = %body.quantity,
        new_quantity = %inventory.quantity_available,
        "Refill synced"
    );

    Ok(Json(SyncResponse {
        success: true,
        inventory,
    }))
}

/// Audit request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    /// Product being audited.
    pub product_id: ProductId,
    /// Vendor holding the stock.
    pub vendor_id: VendorId,
    /// Counted quantity; replaces the stored value absolutely.
    pub new_quantity: i64,
    /// Why the correction was made.
    pub reason: String,
    /// When the count was taken.
    pub timestamp: DateTime<Utc>,
}

/// Apply a stock audit: an absolute quantity correction (upsert).
pub async fn audit(
    State(state): State<Arc<AppState>>,
    _auth: ApiKey,
    Json(body): Json<AuditRequest>,
) -> Result<Json<SyncResponse>, ApiError> {
    if body.new_quantity < 0 {
        return Err(ApiError::BadRequest(
            "audit quantity must not be negative".into(),
        ));
    }

    let inventory = state.store.audit(
        &body.product_id,
        &body.vendor_id,
        body.new_quantity,
        body.reason.clone(),
        body.timestamp,
    )?;

    tracing::info!(
        product_id = %body.product_id,
        vendor_id = %body.vendor_id,
        new_quantity = %body.new_quantity,
        reason = %body.reason,
        "Audit synced"
    );

    Ok(Json(SyncResponse {
        success: true,
        inventory,
    }))
}

/// Sale request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRequest {
    /// Product sold.
    pub product_id: ProductId,
    /// Vendor the stock was drawn from.
    pub vendor_id: VendorId,
    /// Units sold.
    pub quantity: i64,
    /// When the sale happened at the vendor.
    pub timestamp: DateTime<Utc>,
}

/// Apply a sale. Fails with 400 when stock is insufficient or the record
/// does not exist; never upserts.
pub async fn sale(
    State(state): State<Arc<AppState>>,
    _auth: ApiKey,
    Json(body): Json<SaleRequest>,
) -> Result<Json<SyncResponse>, ApiError> {
    if body.quantity <= 0 {
        return Err(ApiError::BadRequest(
            "sale quantity must be positive".into(),
        ));
    }

    let inventory =
        state
            .store
            .sale(&body.product_id, &body.vendor_id, body.quantity, body.timestamp)?;

    tracing::info!(
        product_id = %body.product_id,
        vendor_id = %body.vendor_id,
        quantity = %body.quantity,
        remaining = %inventory.quantity_available,
        "Sale synced"
    );

    Ok(Json(SyncResponse {
        success: true,
        inventory,
    }))
}
