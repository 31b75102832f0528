//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Unauthorized - missing or invalid shared-secret key.
    #[error("unauthorized")]
    Unauthorized,

    /// Bad request - invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Not enough stock to cover a sale or purchase.
    #[error("insufficient stock: available={available}, requested={requested}")]
    InsufficientStock {
        /// Quantity currently available (0 if the record is absent).
        available: i64,
        /// Quantity the caller asked to deduct.
        requested: i64,
    },

    /// The POS service could not be reached or reported failure.
    #[error("failed to sync with POS system: {0}")]
    UpstreamSync(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                self.to_string(),
                None,
            ),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone(), None),
            Self::InsufficientStock {
                available,
                requested,
            } => (
                StatusCode::BAD_REQUEST,
                "insufficient_stock",
                "Insufficient stock".to_string(),
                Some(serde_json::json!({
                    "currentStock": available,
                    "requested": requested
                })),
            ),
            Self::UpstreamSync(msg) => {
                tracing::error!(error = %msg, "POS sync failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "pos_sync_failed",
                    "Failed to sync with POS system".to_string(),
                    None,
                )
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<stock_sync_store::StoreError> for ApiError {
    fn from(err: stock_sync_store::StoreError) -> Self {
        match err {
            stock_sync_store::StoreError::InsufficientStock {
                available,
                requested,
            } => Self::InsufficientStock {
                available,
                requested,
            },
            stock_sync_store::StoreError::Database(msg)
            | stock_sync_store::StoreError::Serialization(msg) => Self::Internal(msg),
        }
    }
}

impl From<crate::pos::PosError> for ApiError {
    fn from(err: crate::pos::PosError) -> Self {
        Self::UpstreamSync(err.to_string())
    }
}
