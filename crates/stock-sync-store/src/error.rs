//! Error types for stock-sync storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Not enough stock to cover a sale or purchase (or no record exists).
    #[error("insufficient stock: available={available}, requested={requested}")]
    InsufficientStock {
        /// Quantity currently available (0 if the record is absent).
        available: i64,
        /// Quantity the caller asked to deduct.
        requested: i64,
    },
}
