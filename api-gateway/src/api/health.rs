//! Health check handler

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// Always "ok" while the server accepts requests
    pub status: String,
}

/// Liveness probe for the hosting platform
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up", body = HealthStatus)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}
