//! `POST /answer`

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use pilot_core::{AnswerRequest, assemble};
use tracing::info;

use super::answer_response;
use crate::AppState;
use crate::error::ApiError;

/// Resolve the installer's interfaces to an answer document.
///
/// The first address with a host override wins; the default document is
/// served otherwise.
pub async fn answer(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = AnswerRequest::from_json(&body)?;
    let addresses = request.addresses()?;

    let resolution = state.resolver.resolve_first_match(&addresses)?;
    let source = resolution.source(state.resolver.store());
    let document = assemble(&resolution.document, state.config.strict)?.to_toml()?;

    info!(
        source = %source,
        candidates = addresses.len(),
        "Served answer"
    );
    answer_response(document, &source)
}
