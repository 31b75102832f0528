//! Stock-Sync HTTP API Service.
//!
//! This crate provides the HTTP API for the stock-sync backend:
//!
//! - Inventory sync mutations (refill, audit, sale)
//! - Per-product inventory queries
//! - Portal purchases forwarded to the external POS service
//!
//! # Authentication
//!
//! All `/api` routes require the shared-secret `x-api-key` header. The
//! health endpoint is public.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers must be async for Axum even when the store is sync

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod pos;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use pos::{PosClient, PosError};
pub use routes::create_router;
pub use state::AppState;
