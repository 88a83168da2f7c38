//! Error types for the inventory server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the inventory server.
///
/// Cache misses are deliberately absent: a miss is a normal control-flow
/// branch inside the list services, never an error.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Entity not found by id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data rejected at the API boundary
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the inventory server.
pub type Result<T> = std::result::Result<T, ApiError>;
