//! Inventory query handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use stock_sync_core::{InventoryRecord, ProductId};
use stock_sync_store::Store;

use crate::auth::ApiKey;
use crate::error::ApiError;
use crate::state::AppState;

/// Per-product inventory response.
#[derive(Debug, Serialize)]
pub struct InventoriesResponse {
    /// Vendor records with stock remaining.
    pub inventories: Vec<InventoryRecord>,
}

/// Get current inventory for a product across all vendors.
///
/// Depleted records are omitted, so callers cannot distinguish "depleted"
/// from "never stocked" through this call.
pub async fn get_inventory(
    State(state): State<Arc<AppState>>,
    _auth: ApiKey,
    Path(product_id): Path<ProductId>,
) -> Result<Json<InventoriesResponse>, ApiError> {
    let inventories = state.store.list_in_stock(&product_id)?;

    Ok(Json(InventoriesResponse { inventories }))
}
