//! Error handling for the API gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error information
    pub error: ErrorInfo,
    /// Request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Detailed error information
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Error code (string identifier for the error type)
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// API errors
///
/// Lookup misses never end up here; they render as empty values.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Common error: {0}")]
    Common(#[from] common::error::Error),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Common(e) => match e {
                common::error::Error::Configuration(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error")
                }
                common::error::Error::Template(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "template_error")
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Generate a request ID for tracking errors
        let request_id = Uuid::new_v4().to_string();

        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!("API Error [{}]: {:?}", request_id, &self);
        } else {
            tracing::debug!("API Error [{}]: {:?}", request_id, &self);
        }

        let error_response = ErrorResponse {
            error: ErrorInfo {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id: Some(request_id),
        };

        (status, Json(error_response)).into_response()
    }
}
