//! Identifier types for stock-sync.
//!
//! Product and vendor identifiers are opaque strings supplied by the
//! upstream catalog; order identifiers are generated locally.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::IdError;

/// Reject identifiers the store's composite key cannot represent.
///
/// Applied on every construction path, including deserialization, so a
/// NUL-bearing or empty identifier can never reach the key encoding.
fn validate(id: &str) -> Result<(), IdError> {
    if id.is_empty() {
        return Err(IdError::Empty);
    }
    if id.contains('\0') {
        return Err(IdError::ContainsNul);
    }
    Ok(())
}

/// An opaque product identifier (e.g. `"PROD001"`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Create a `ProductId` from a string known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if the string is empty or contains NUL. Use the `FromStr`
    /// or `TryFrom<String>` conversions for untrusted input.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(validate(&id).is_ok(), "invalid product id: {id:?}");
        Self(id)
    }

    /// Return the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the raw bytes of the identifier.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl FromStr for ProductId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for ProductId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)?;
        Ok(Self(value))
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl fmt::Debug for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProductId({})", self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An opaque vendor identifier (e.g. `"VENDOR001"`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VendorId(String);

impl VendorId {
    /// Create a `VendorId` from a string known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if the string is empty or contains NUL. Use the `FromStr`
    /// or `TryFrom<String>` conversions for untrusted input.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(validate(&id).is_ok(), "invalid vendor id: {id:?}");
        Self(id)
    }

    /// Return the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the raw bytes of the identifier.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl FromStr for VendorId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for VendorId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)?;
        Ok(Self(value))
    }
}

impl From<VendorId> for String {
    fn from(id: VendorId) -> Self {
        id.0
    }
}

impl fmt::Debug for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VendorId({})", self.0)
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An order identifier generated for each purchase.
///
/// Backed by a ULID (millisecond timestamp plus 80 random bits) and
/// rendered as `ORD<ulid>`. Collision-avoidant through randomness; no
/// global uniqueness is enforced beyond that.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(Ulid);

impl OrderId {
    /// Generate a new `OrderId` with the current timestamp.
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    /// Create an `OrderId` from a ULID.
    #[must_use]
    pub const fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Return the underlying ULID.
    #[must_use]
    pub const fn as_ulid(&self) -> &Ulid {
        &self.0
    }
}

impl FromStr for OrderId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ulid = s
            .strip_prefix("ORD")
            .and_then(|rest| Ulid::from_string(rest).ok())
            .ok_or(IdError::InvalidOrderId)?;
        Ok(Self(ulid))
    }
}

impl fmt::Debug for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderId(ORD{})", self.0)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ORD{}", self.0)
    }
}

impl TryFrom<String> for OrderId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_rejects_empty() {
        assert_eq!("".parse::<ProductId>(), Err(IdError::Empty));
        assert!("PROD001".parse::<ProductId>().is_ok());
    }

    #[test]
    fn identifiers_reject_embedded_nul() {
        // NUL separates the store's composite key components; an
        // identifier carrying one would make distinct (product, vendor)
        // pairs collide under the same key.
        assert_eq!("A\0B".parse::<ProductId>(), Err(IdError::ContainsNul));
        assert_eq!("B\0C".parse::<VendorId>(), Err(IdError::ContainsNul));
    }

    #[test]
    fn deserialization_routes_through_validation() {
        // Wire input (JSON bodies, path segments) must hit the same
        // checks as FromStr.
        assert!(serde_json::from_str::<ProductId>("\"A\\u0000B\"").is_err());
        assert!(serde_json::from_str::<ProductId>("\"\"").is_err());
        assert!(serde_json::from_str::<VendorId>("\"A\\u0000B\"").is_err());
        assert!(serde_json::from_str::<VendorId>("\"\"").is_err());

        let id: ProductId = serde_json::from_str("\"PROD001\"").unwrap();
        assert_eq!(id.as_str(), "PROD001");
    }

    #[test]
    fn order_id_display_roundtrip() {
        let id = OrderId::generate();
        let rendered = id.to_string();
        assert!(rendered.starts_with("ORD"));

        let parsed: OrderId = rendered.parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn order_id_rejects_bad_prefix() {
        assert_eq!(
            "XYZ01ARZ3NDEKTSV4RRFFQ69G5FAV".parse::<OrderId>(),
            Err(IdError::InvalidOrderId)
        );
        assert_eq!("ORDnot-a-ulid".parse::<OrderId>(), Err(IdError::InvalidOrderId));
    }

    #[test]
    fn order_id_serde_as_string() {
        let id = OrderId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));

        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn order_ids_are_time_ordered() {
        let a = OrderId::generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = OrderId::generate();
        assert!(a.as_ulid().timestamp_ms() <= b.as_ulid().timestamp_ms());
    }
}
