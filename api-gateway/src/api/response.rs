//! Standardized API response formats
//!
//! JSON endpoints wrap their payload in the same envelope so clients can rely
//! on a `data` field being present.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use utoipa::ToSchema;

use crate::api::config::ConfigValue;

/// A standardized API response wrapper for single resource responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[aliases(ConfigValueResponse = ApiResponse<ConfigValue>)]
pub struct ApiResponse<T> {
    /// The response data
    pub data: T,
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize + Debug,
{
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl<T> ApiResponse<T> {
    /// Create a new API response with just data
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
