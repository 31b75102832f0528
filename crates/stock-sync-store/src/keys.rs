//! Key encoding utilities for `RocksDB`.
//!
//! Inventory records use a composite key so that all vendor records for a
//! product are contiguous and reachable with a prefix scan.

use stock_sync_core::{ProductId, VendorId};

/// Separator byte between the product and vendor components.
///
/// `ProductId` and `VendorId` reject NUL on every construction path, so
/// the encoding stays unambiguous.
const SEP: u8 = 0;

/// Create an inventory key: `product_id || 0x00 || vendor_id`.
#[must_use]
pub fn inventory_key(product_id: &ProductId, vendor_id: &VendorId) -> Vec<u8> {
    let mut key = Vec::with_capacity(product_id.as_bytes().len() + 1 + vendor_id.as_bytes().len());
    key.extend_from_slice(product_id.as_bytes());
    key.push(SEP);
    key.extend_from_slice(vendor_id.as_bytes());
    key
}

/// Create the prefix covering every vendor record for a product.
#[must_use]
pub fn product_prefix(product_id: &ProductId) -> Vec<u8> {
    let mut prefix = Vec::with_capacity(product_id.as_bytes().len() + 1);
    prefix.extend_from_slice(product_id.as_bytes());
    prefix.push(SEP);
    prefix
}
