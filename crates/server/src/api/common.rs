// Common DTOs and error conversion for the public API
//
// Every handler failure ends up as a JSON body: expected client failures carry
// `{message}` with 400, everything else carries `{error}` with 500.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Plain message response used for confirmations and client errors.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Event deleted")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Handler-boundary error
#[derive(Debug)]
pub enum ApiError {
    /// 400 with `{message}`
    BadRequest(String),
    /// 500 with `{error}`
    Internal(String),
}

impl ApiError {
    /// Surface an internal failure with its full cause chain
    pub fn internal(err: &anyhow::Error) -> Self {
        Self::Internal(format!("{:#}", err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Internal(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(MessageResponse::new(message))).into_response()
            }
            ApiError::Internal(error) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new(error))).into_response()
            }
        }
    }
}
