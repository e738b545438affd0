//! Error to HTTP status mapping

use axum::http::StatusCode;
use axum::http::header::InvalidHeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pilot_boot::BootError;
use serde_json::json;
use tracing::{error, warn};

/// Error returned by request handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] pilot_core::Error),

    #[error(transparent)]
    Boot(#[from] BootError),

    #[error("invalid header value: {0}")]
    Header(#[from] InvalidHeaderValue),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        use pilot_core::Error as Core;

        match self {
            ApiError::Core(Core::InvalidAddress { .. } | Core::MalformedRequest { .. }) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Core(Core::MissingConfiguration { .. }) => StatusCode::NOT_FOUND,
            ApiError::Core(Core::IncompleteConfiguration { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Core(_) | ApiError::Boot(_) | ApiError::Header(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = match &self {
            ApiError::Core(pilot_core::Error::IncompleteConfiguration { missing }) => {
                json!({ "error": self.to_string(), "missing": missing })
            }
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
