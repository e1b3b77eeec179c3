// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::models::LikeError;
use crate::store::StoreError;

/// API error with the status code and JSON body each failure maps to.
///
/// Single errors render as `{"msg": "..."}`; validation failures carry the
/// itemized form `{"errors": [{"msg": "..."}, ...]}`.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request, itemized body
    Validation(Vec<String>),

    // 400 Bad Request (duplicate registration, already-liked/not-liked)
    Conflict(String),

    // 401 Unauthorized - request halted before the handler ran
    Unauthorized(String),

    // 401 - resource exists but the caller does not own it. Kept apart from
    // Unauthorized internally; the wire status matches the original API.
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error - generic body, detail stays in the logs
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Validation(msgs) => {
                let errors: Vec<Value> = msgs.iter().map(|m| json!({ "msg": m })).collect();
                json!({ "errors": errors })
            }
            ApiError::Conflict(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg) => json!({ "msg": msg }),
            ApiError::Internal(_) => json!({ "msg": "Internal Server Error" }),
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn validation(msgs: Vec<impl Into<String>>) -> Self {
        ApiError::Validation(msgs.into_iter().map(Into::into).collect())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // Log the real error but never leak it to the client
        tracing::error!("store error: {}", err);
        ApiError::internal(err.to_string())
    }
}

impl From<LikeError> for ApiError {
    fn from(err: LikeError) -> Self {
        ApiError::conflict(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(msgs) => write!(f, "{}", msgs.join(", ")),
            ApiError::Conflict(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
