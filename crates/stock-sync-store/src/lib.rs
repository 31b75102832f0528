//! `RocksDB` storage layer for stock-sync.
//!
//! This crate persists one [`InventoryRecord`] per (product, vendor) pair
//! and implements the guarded mutations the service relies on: upserting
//! refills and audits, and sales/purchases that can never drive a record
//! negative.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use stock_sync_core::{ProductId, VendorId};
//! use stock_sync_store::{RocksStore, Store};
//!
//! let store = RocksStore::open("/tmp/stock-sync-db").unwrap();
//!
//! let product = ProductId::new("PROD001");
//! let vendor = VendorId::new("VENDOR001");
//!
//! // Creates the record on first refill (upsert).
//! let record = store.refill(&product, &vendor, 20, Utc::now()).unwrap();
//! assert_eq!(record.quantity_available, 20);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod rocks;
pub mod schema;

pub use error::{Result, StoreError};
pub use rocks::RocksStore;

use chrono::{DateTime, Utc};
use stock_sync_core::{InventoryRecord, OrderId, ProductId, VendorId};

/// The storage trait defining all inventory operations.
///
/// Abstracts the storage layer so the service can be exercised against
/// different backends. Mutations are atomic with respect to each other:
/// the availability guard and the write are a single step, which is what
/// keeps concurrent sales from overselling.
pub trait Store: Send + Sync {
    /// Get the record for a (product, vendor) pair, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get(&self, product_id: &ProductId, vendor_id: &VendorId)
        -> Result<Option<InventoryRecord>>;

    /// Apply a refill, creating the record if absent (upsert).
    ///
    /// Increments the available quantity, sets `last_sync`, and appends
    /// one `refill` sync entry. Returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn refill(
        &self,
        product_id: &ProductId,
        vendor_id: &VendorId,
        quantity: i64,
        timestamp: DateTime<Utc>,
    ) -> Result<InventoryRecord>;

    /// Apply an audit, creating the record if absent (upsert).
    ///
    /// Sets the available quantity absolutely, appends one audit entry
    /// and one `audit` sync entry whose delta is `new - old`. Returns the
    /// updated record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn audit(
        &self,
        product_id: &ProductId,
        vendor_id: &VendorId,
        new_quantity: i64,
        reason: String,
        timestamp: DateTime<Utc>,
    ) -> Result<InventoryRecord>;

    /// Apply a sale. Never upserts: a sale against a missing record fails.
    ///
    /// The decrement is guarded; when the record is absent or holds less
    /// than `quantity`, nothing is written.
    ///
    /// # Errors
    ///
    /// - `StoreError::InsufficientStock` if the record is absent or the
    ///   available quantity is below `quantity`.
    /// - `StoreError::Database` if the database operation fails.
    fn sale(
        &self,
        product_id: &ProductId,
        vendor_id: &VendorId,
        quantity: i64,
        timestamp: DateTime<Utc>,
    ) -> Result<InventoryRecord>;

    /// Apply a purchase: a guarded decrement recording the order id.
    ///
    /// Same guard as [`Store::sale`]; the sync entry carries the action
    /// `purchase` and the generated order id.
    ///
    /// # Errors
    ///
    /// - `StoreError::InsufficientStock` if the record is absent or the
    ///   available quantity is below `quantity`.
    /// - `StoreError::Database` if the database operation fails.
    fn purchase(
        &self,
        product_id: &ProductId,
        vendor_id: &VendorId,
        quantity: i64,
        order_id: &OrderId,
        timestamp: DateTime<Utc>,
    ) -> Result<InventoryRecord>;

    /// List all vendor records for a product with stock remaining.
    ///
    /// Fully depleted records are omitted; callers cannot distinguish
    /// "depleted" from "never stocked" through this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_in_stock(&self, product_id: &ProductId) -> Result<Vec<InventoryRecord>>;
}
