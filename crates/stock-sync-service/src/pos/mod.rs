//! POS service integration.
//!
//! The external point-of-sale service is a black-box RPC peer: purchases
//! are forwarded to it before local inventory is decremented.

pub mod client;
pub mod types;

pub use client::{PosClient, PosError};
pub use types::{PosSyncRequest, PosSyncResponse};
