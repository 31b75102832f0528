//! Core domain types for the stock-sync service.
//!
//! This crate defines the inventory record model shared by the storage
//! layer and the HTTP service: identifiers, the per-(product, vendor)
//! [`InventoryRecord`], and its append-only history entries.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;
pub mod inventory;

pub use error::IdError;
pub use ids::{OrderId, ProductId, VendorId};
pub use inventory::{AuditEntry, InventoryRecord, SyncAction, SyncEntry};
