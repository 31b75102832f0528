//! API handlers.

pub mod health;
pub mod inventory;
pub mod portal;
pub mod sync;
