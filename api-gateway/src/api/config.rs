//! Config API handlers
//!
//! JSON counterparts of the HTML pages:
//! - Default secret lookup
//! - Named config lookup

use std::sync::Arc;

use axum::extract::{Path, State};
use common::model::LookupResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::response::ApiResponse;
use crate::error::ApiError;
use crate::AppState;

/// Config value as returned by the JSON API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConfigValue {
    /// Normalized environment variable name
    pub key: Option<String>,
    /// Current value, absent when unset
    pub value: Option<String>,
    /// Whether both key and value are non-empty
    pub resolved: bool,
}

impl From<LookupResult> for ConfigValue {
    fn from(result: LookupResult) -> Self {
        Self {
            resolved: result.is_resolved(),
            key: result.key,
            value: result.value,
        }
    }
}

/// Get the default secret
#[utoipa::path(
    get,
    path = "/api/v1/config",
    responses(
        (status = 200, description = "Default secret looked up", body = ConfigValueResponse)
    ),
    tag = "config"
)]
pub async fn get_default_config(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<ConfigValue>, ApiError> {
    let result = state.lookup.fetch_default_secret();
    Ok(ApiResponse::new(result.into()))
}

/// Get a config value by name
#[utoipa::path(
    get,
    path = "/api/v1/config/{key}",
    params(
        ("key" = String, Path, description = "Environment variable name, any case")
    ),
    responses(
        (status = 200, description = "Config value looked up", body = ConfigValueResponse)
    ),
    tag = "config"
)]
pub async fn get_config(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<ApiResponse<ConfigValue>, ApiError> {
    let result = state.lookup.fetch_named(Some(&key));
    Ok(ApiResponse::new(result.into()))
}
