//! Route handlers

pub mod answer;
pub mod boot;
pub mod health;
pub mod hosts;

use axum::http::header::{self, HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use pilot_core::answer::CONTENT_TYPE;

use crate::error::ApiError;

/// Names the file an answer was built from.
pub const SOURCE_HEADER: HeaderName = HeaderName::from_static("x-pxe-pilot-source");

/// Content type of iPXE scripts.
pub const SCRIPT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// TOML answer body tagged with its source file.
fn answer_response(body: String, source: &str) -> Result<Response, ApiError> {
    let source = HeaderValue::from_str(source)?;
    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE)),
        (SOURCE_HEADER, source),
    ];
    Ok((headers, body).into_response())
}

fn script_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, SCRIPT_CONTENT_TYPE)], body).into_response()
}
