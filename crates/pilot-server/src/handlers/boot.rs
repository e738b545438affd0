//! `GET /boot.ipxe` and `GET /menu.ipxe`

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::uri::Authority;
use axum::http::{HeaderMap, header};
use axum::response::Response;
use pilot_boot::{MenuConfig, MenuRenderer, chain_script, scan};
use tracing::{debug, info, warn};

use super::script_response;
use crate::AppState;
use crate::error::ApiError;

pub async fn boot_script() -> Response {
    script_response(chain_script())
}

/// Scan the assets tree and render the menu for it.
pub async fn menu_script(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let base_url = base_url(&state, &headers);
    debug!(base_url = %base_url, "Rendering boot menu");

    let catalog = scan(&state.config.assets_dir)?;
    let script = MenuRenderer::new(MenuConfig::new(base_url)).render(&catalog);

    info!(products = catalog.len(), "Served boot menu");
    Ok(script_response(script))
}

/// Configured asset URL, else the Host the client asked for.
///
/// A Host that is not a valid authority falls back to the bind address so
/// it can never reach the kernel command line.
fn base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(url) = &state.config.asset_url {
        return url.clone();
    }

    let Some(host) = headers.get(header::HOST) else {
        return state.config.fallback_base_url();
    };

    match host.to_str().ok().map(Authority::from_str) {
        Some(Ok(authority)) => format!("http://{authority}"),
        _ => {
            warn!(host = ?host, "Ignoring malformed Host header");
            state.config.fallback_base_url()
        }
    }
}
