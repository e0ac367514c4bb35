use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::domain::generator::GenerateError;

/// Failure surfaced by the download route. Every variant collapses to the
/// same plain-text 500 response; the variants exist for logging.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Generation(#[from] GenerateError),
    #[error("generated payload was not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "image request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "image generation failed").into_response()
    }
}
