//! HTML page handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;
use common::model::LookupResult;

use crate::error::ApiError;
use crate::render::{TemplateContext, CONFIG_TEMPLATE, INDEX_TEMPLATE};
use crate::AppState;

/// Root page showing the default secret
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let result = state.lookup.fetch_default_secret();
    render_page(&state, INDEX_TEMPLATE, &result)
}

/// Page showing the value of the variable named by the path segment
pub async fn config_value(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Html<String>, ApiError> {
    let result = state.lookup.fetch_named(Some(&key));
    render_page(&state, CONFIG_TEMPLATE, &result)
}

fn render_page(
    state: &AppState,
    template: &str,
    result: &LookupResult,
) -> Result<Html<String>, ApiError> {
    let html = state
        .renderer
        .render(template, &TemplateContext::from(result))?;
    Ok(Html(html))
}
