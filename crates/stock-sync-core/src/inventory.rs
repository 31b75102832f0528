//! Inventory record model.
//!
//! One [`InventoryRecord`] exists per unique (product, vendor) pair. Every
//! mutation appends exactly one [`SyncEntry`]; audits additionally append
//! an [`AuditEntry`]. Histories are append-only and never truncated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{OrderId, ProductId, VendorId};

/// The kind of mutation recorded in the sync history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncAction {
    /// Stock added by a vendor refill.
    Refill,
    /// Absolute quantity correction from a stock audit.
    Audit,
    /// Stock removed by a synced sale.
    Sale,
    /// Stock removed by a customer purchase through the portal.
    Purchase,
}

impl SyncAction {
    /// Return the lowercase wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Refill => "refill",
            Self::Audit => "audit",
            Self::Sale => "sale",
            Self::Purchase => "purchase",
        }
    }
}

impl std::fmt::Display for SyncAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the sync history: a single applied mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncEntry {
    /// When the mutation was applied (caller-supplied for sync endpoints,
    /// server-generated for purchases).
    pub timestamp: DateTime<Utc>,
    /// Which operation produced this entry.
    pub action: SyncAction,
    /// Signed quantity delta (negative for sales and purchases).
    pub quantity: i64,
    /// Quantity available before the mutation.
    pub previous_quantity: i64,
    /// Order identifier, present only for purchase entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
}

/// One entry in the audit history: an absolute quantity correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    /// When the audit was recorded.
    pub timestamp: DateTime<Utc>,
    /// Quantity before the audit (0 if the record was created by it).
    pub old_quantity: i64,
    /// Quantity set by the audit.
    pub new_quantity: i64,
    /// Caller-supplied reason for the correction.
    pub reason: String,
}

/// Per-(product, vendor) inventory state with full mutation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    /// The product this record tracks.
    pub product_id: ProductId,
    /// The vendor holding the stock.
    pub vendor_id: VendorId,
    /// Units currently available. Guarded updates keep this non-negative
    /// for sales and purchases.
    pub quantity_available: i64,
    /// Timestamp of the most recent mutation.
    pub last_sync: DateTime<Utc>,
    /// Append-only audit trail of absolute corrections.
    pub audit_history: Vec<AuditEntry>,
    /// Append-only trail of every mutation.
    pub sync_history: Vec<SyncEntry>,
    /// When the record was first created.
    pub created_at: DateTime<Utc>,
    /// When the record was last written.
    pub updated_at: DateTime<Utc>,
}

impl InventoryRecord {
    /// Create an empty record for a (product, vendor) pair.
    #[must_use]
    pub fn new(product_id: ProductId, vendor_id: VendorId, now: DateTime<Utc>) -> Self {
        Self {
            product_id,
            vendor_id,
            quantity_available: 0,
            last_sync: now,
            audit_history: Vec::new(),
            sync_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a refill: increment quantity and append one sync entry.
    pub fn apply_refill(&mut self, quantity: i64, timestamp: DateTime<Utc>) {
        let previous = self.quantity_available;
        self.quantity_available += quantity;
        self.last_sync = timestamp;
        self.updated_at = Utc::now();
        self.sync_history.push(SyncEntry {
            timestamp,
            action: SyncAction::Refill,
            quantity,
            previous_quantity: previous,
            order_id: None,
        });
    }

    /// Apply an audit: set quantity absolutely, append one audit entry and
    /// one sync entry carrying the signed delta.
    pub fn apply_audit(&mut self, new_quantity: i64, reason: String, timestamp: DateTime<Utc>) {
        let old = self.quantity_available;
        self.quantity_available = new_quantity;
        self.last_sync = timestamp;
        self.updated_at = Utc::now();
        self.audit_history.push(AuditEntry {
            timestamp,
            old_quantity: old,
            new_quantity,
            reason,
        });
        self.sync_history.push(SyncEntry {
            timestamp,
            action: SyncAction::Audit,
            quantity: new_quantity - old,
            previous_quantity: old,
            order_id: None,
        });
    }

    /// Apply a sale: decrement quantity and append one sync entry with a
    /// negative delta. The caller must have verified sufficiency.
    pub fn apply_sale(&mut self, quantity: i64, timestamp: DateTime<Utc>) {
        self.apply_debit(SyncAction::Sale, quantity, None, timestamp);
    }

    /// Apply a purchase: like a sale, with the order id recorded.
    pub fn apply_purchase(&mut self, quantity: i64, order_id: OrderId, timestamp: DateTime<Utc>) {
        self.apply_debit(SyncAction::Purchase, quantity, Some(order_id), timestamp);
    }

    fn apply_debit(
        &mut self,
        action: SyncAction,
        quantity: i64,
        order_id: Option<OrderId>,
        timestamp: DateTime<Utc>,
    ) {
        let previous = self.quantity_available;
        self.quantity_available -= quantity;
        self.last_sync = timestamp;
        self.updated_at = Utc::now();
        self.sync_history.push(SyncEntry {
            timestamp,
            action,
            quantity: -quantity,
            previous_quantity: previous,
            order_id,
        });
    }
}
