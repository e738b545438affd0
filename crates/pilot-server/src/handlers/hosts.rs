//! `GET /hosts` and `GET /hosts/{mac}`

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Response;
use pilot_core::{MacAddress, assemble};
use serde::Serialize;
use tracing::info;

use super::answer_response;
use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct HostsResponse {
    pub hosts: Vec<MacAddress>,
    pub host_count: usize,
    pub default_exists: bool,
}

/// Configured override addresses in ascending order.
pub async fn list_hosts(State(state): State<Arc<AppState>>) -> Result<Json<HostsResponse>, ApiError> {
    let store = state.resolver.store();
    let hosts: Vec<_> = store.list_override_addresses()?.into_iter().collect();

    Ok(Json(HostsResponse {
        host_count: hosts.len(),
        default_exists: store.default_exists(),
        hosts,
    }))
}

/// Best-effort answer for one address, never rejected for missing fields.
pub async fn preview_host(
    State(state): State<Arc<AppState>>,
    Path(mac): Path<String>,
) -> Result<Response, ApiError> {
    let resolution = state.resolver.resolve_first_match(&[mac.as_str()])?;
    let source = resolution.source(state.resolver.store());
    let document = assemble(&resolution.document, false)?.to_toml()?;

    info!(source = %source, "Served answer preview");
    answer_response(document, &source)
}
