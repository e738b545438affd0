//! `GET /health`

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub config_dir: String,
    pub assets_dir: String,
    pub default_exists: bool,
    pub host_count: usize,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    let store = state.resolver.store();

    Ok(Json(HealthResponse {
        status: "ok",
        config_dir: store.root().display().to_string(),
        assets_dir: state.config.assets_dir.display().to_string(),
        default_exists: store.default_exists(),
        host_count: store.list_override_addresses()?.len(),
    }))
}
