//! Database schema definitions and column families.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// Inventory records, keyed by `product_id || 0x00 || vendor_id`.
    ///
    /// The composite key doubles as the uniqueness constraint on the
    /// (product, vendor) pair, and prefix iteration over
    /// `product_id || 0x00` yields every vendor record for a product.
    pub const INVENTORY: &str = "inventory";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::INVENTORY]
}
