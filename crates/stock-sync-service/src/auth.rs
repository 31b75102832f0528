//! Authentication extractor.
//!
//! Every `/api` route requires the shared-secret `x-api-key` header. The
//! extractor rejects the request before any handler logic runs; success
//! has no side effects.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::state::AppState;

/// A validated shared-secret key extracted from the `x-api-key` header.
#[derive(Debug, Clone)]
pub struct ApiKey;

impl FromRequestParts<Arc<AppState>> for ApiKey {
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        state: &'life1 Arc<AppState>,
    ) -> ::core::pin::Pin<
        Box<
            dyn ::core::future::Future<Output = Result<Self, Self::Rejection>>
                + ::core::marker::Send
                + 'async_trait,
        >,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let provided = parts
                .headers
                .get("x-api-key")
                .and_then(|v| v.to_str().ok())
                .ok_or(ApiError::Unauthorized)?;

            // An unconfigured key rejects everything rather than allowing
            // open access.
            let expected = state
                .config
                .api_key
                .as_ref()
                .ok_or(ApiError::Unauthorized)?;

            if provided != expected {
                return Err(ApiError::Unauthorized);
            }

            Ok(ApiKey)
        })
    }
}
