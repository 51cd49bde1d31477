//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or invalid bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Malformed input, with a field-level message
    #[error("Validation failed on {field}: {message}")]
    Validation { field: String, message: String },

    /// Bad request with a plain message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Actor is not the owner of the resource
    #[error("{0}")]
    PermissionDenied(String),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] common::error::DatabaseError),

    /// Raw query error
    #[error("Query error: {0}")]
    Query(#[from] sqlx::Error),
}

impl ApiError {
    /// Shorthand for a field-level validation error
    pub fn validation(field: &str, message: &str) -> Self {
        ApiError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation { .. } | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            ApiError::InternalServerError | ApiError::Database(_) | ApiError::Query(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::Validation { field, message } => Json(json!({
                "errors": { field: [message] },
            })),
            ApiError::Unauthorized => Json(json!({
                "error": "Unauthorized",
            })),
            ApiError::BadRequest(msg) => Json(json!({
                "error": msg,
            })),
            ApiError::NotFound(what) => Json(json!({
                "error": format!("{} not found", what),
            })),
            ApiError::PermissionDenied(msg) => Json(json!({
                "error": msg,
            })),
            ApiError::InternalServerError | ApiError::Database(_) | ApiError::Query(_) => {
                Json(json!({
                    "error": "Internal server error",
                }))
            }
        };

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
