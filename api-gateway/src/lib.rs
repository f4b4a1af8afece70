//! HTTP gateway for envpeek
//!
//! Serves the config lookup as HTML pages and as a JSON API.

pub mod api;
pub mod config;
pub mod error;
pub mod render;
pub mod telemetry;

use std::sync::Arc;

use axum::{http::Uri, routing::get, Router};
use config_lookup::ConfigLookupService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;

use crate::error::ApiError;
use crate::render::{EmbeddedTemplates, TemplateRenderer};

/// API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        api::config::get_default_config,
        api::config::get_config,
        api::health::health,
    ),
    components(
        schemas(
            api::config::ConfigValue,
            api::response::ConfigValueResponse,
            api::health::HealthStatus,
        )
    ),
    tags(
        (name = "config", description = "Environment configuration lookup"),
        (name = "health", description = "Liveness probe")
    ),
    info(
        title = "envpeek API",
        version = "0.1.0",
        description = "Reads configuration values from the process environment"
    )
)]
pub struct ApiDoc;

/// App state shared across handlers
#[derive(Debug)]
pub struct AppState {
    /// Config lookup core
    pub lookup: ConfigLookupService,
    /// Page renderer
    pub renderer: Arc<dyn TemplateRenderer>,
}

impl AppState {
    /// State with the given lookup service and page renderer
    pub fn new(lookup: ConfigLookupService, renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self { lookup, renderer }
    }

    /// State rendering with the bundled page templates
    pub fn with_bundled_templates(lookup: ConfigLookupService) -> common::Result<Self> {
        Ok(Self::new(lookup, Arc::new(EmbeddedTemplates::bundled()?)))
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>, log_level: Level) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/config", get(api::config::get_default_config))
        .route("/config/:key", get(api::config::get_config));

    Router::new()
        .route("/", get(api::pages::index))
        .route("/health", get(api::health::health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/:key", get(api::pages::config_value))
        .nest("/api/v1", api_routes)
        .fallback(not_found)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(log_level))
                .on_request(DefaultOnRequest::new().level(log_level))
                .on_response(DefaultOnResponse::new().level(log_level)),
        )
        .with_state(state)
}

async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
