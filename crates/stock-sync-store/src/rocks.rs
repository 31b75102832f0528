//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `Store`
//! trait.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options,
};

use stock_sync_core::{InventoryRecord, OrderId, ProductId, VendorId};

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::Store;

/// RocksDB-backed storage implementation.
///
/// Compound mutations (read, guard, write) are serialized behind an
/// internal mutex so the availability check and the update form one
/// atomic step. Reads bypass the mutex.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
    write_lock: Mutex<()>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self {
            db: Arc::new(db),
            write_lock: Mutex::new(()),
        })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Read a record without taking the write lock.
    fn read_record(
        &self,
        product_id: &ProductId,
        vendor_id: &VendorId,
    ) -> Result<Option<InventoryRecord>> {
        let cf = self.cf(cf::INVENTORY)?;
        let key = keys::inventory_key(product_id, vendor_id);

        self.db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    /// Write a record back under its composite key.
    fn write_record(&self, record: &InventoryRecord) -> Result<()> {
        let cf = self.cf(cf::INVENTORY)?;
        let key = keys::inventory_key(&record.product_id, &record.vendor_id);
        let value = Self::serialize(record)?;

        self.db
            .put_cf(&cf, key, value)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    /// Guarded decrement shared by sales and purchases.
    ///
    /// Holds the write lock across the read, the sufficiency check, and
    /// the write, so concurrent debits can never oversell in aggregate.
    fn debit(
        &self,
        product_id: &ProductId,
        vendor_id: &VendorId,
        quantity: i64,
        order_id: Option<&OrderId>,
        timestamp: DateTime<Utc>,
    ) -> Result<InventoryRecord> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut record = match self.read_record(product_id, vendor_id)? {
            Some(record) if record.quantity_available >= quantity => record,
            Some(record) => {
                return Err(StoreError::InsufficientStock {
                    available: record.quantity_available,
                    requested: quantity,
                })
            }
            None => {
                return Err(StoreError::InsufficientStock {
                    available: 0,
                    requested: quantity,
                })
            }
        };

        match order_id {
            Some(order_id) => record.apply_purchase(quantity, *order_id, timestamp),
            None => record.apply_sale(quantity, timestamp),
        }

        self.write_record(&record)?;
        Ok(record)
    }
}

impl Store for RocksStore {
    fn get(
        &self,
        product_id: &ProductId,
        vendor_id: &VendorId,
    ) -> Result<Option<InventoryRecord>> {
        self.read_record(product_id, vendor_id)
    }

    fn refill(
        &self,
        product_id: &ProductId,
        vendor_id: &VendorId,
        quantity: i64,
        timestamp: DateTime<Utc>,
    ) -> Result<InventoryRecord> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut record = self
            .read_record(product_id, vendor_id)?
            .unwrap_or_else(|| {
                InventoryRecord::new(product_id.clone(), vendor_id.clone(), timestamp)
            });

        record.apply_refill(quantity, timestamp);
        self.write_record(&record)?;

        Ok(record)
    }

    fn audit(
        &self,
        product_id: &ProductId,
        vendor_id: &VendorId,
        new_quantity: i64,
        reason: String,
        timestamp: DateTime<Utc>,
    ) -> Result<InventoryRecord> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut record = self
            .read_record(product_id, vendor_id)?
            .unwrap_or_else(|| {
                InventoryRecord::new(product_id.clone(), vendor_id.clone(), timestamp)
            });

        record.apply_audit(new_quantity, reason, timestamp);
        self.write_record(&record)?;

        Ok(record)
    }

    fn sale(
        &self,
        product_id: &ProductId,
        vendor_id: &VendorId,
        quantity: i64,
        timestamp: DateTime<Utc>,
    ) -> Result<InventoryRecord> {
        self.debit(product_id, vendor_id, quantity, None, timestamp)
    }

    fn purchase(
        &self,
        product_id: &ProductId,
        vendor_id: &VendorId,
        quantity: i64,
        order_id: &OrderId,
        timestamp: DateTime<Utc>,
    ) -> Result<InventoryRecord> {
        self.debit(product_id, vendor_id, quantity, Some(order_id), timestamp)
    }

    fn list_in_stock(&self, product_id: &ProductId) -> Result<Vec<InventoryRecord>> {
        let cf = self.cf(cf::INVENTORY)?;
        let prefix = keys::product_prefix(product_id);

        let mut records = Vec::new();
        let iter = self.db.iterator_cf(
            &cf,
            IteratorMode::From(&prefix, rocksdb::Direction::Forward),
        );

        for item in iter {
            let (key, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;

            if !key.starts_with(&prefix) {
                break;
            }

            let record: InventoryRecord = Self::deserialize(&value)?;
            if record.quantity_available > 0 {
                records.push(record);
            }
        }

        Ok(records)
    }
}
