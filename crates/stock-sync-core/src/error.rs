//! Error types for core identifiers.

/// Errors that can occur when parsing identifiers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdError {
    /// The identifier string was empty.
    #[error("identifier must not be empty")]
    Empty,

    /// The identifier string contained a NUL byte.
    ///
    /// NUL is the separator in the store's composite keys, so it can
    /// never appear inside an identifier.
    #[error("identifier must not contain NUL")]
    ContainsNul,

    /// The order identifier did not match the `ORD<ulid>` format.
    #[error("invalid order id")]
    InvalidOrderId,
}
