//! Error types for the web interface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use templar_registry::RepositoryError;

/// Failures that end a web request with `500`.
///
/// Validation problems are not errors here: they re-render the form.
#[derive(Debug, Error)]
pub enum WebError {
    /// A page template failed to compile or render.
    #[error("render error: {0}")]
    Render(String),
    /// The repository could not serve the request.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<minijinja::Error> for WebError {
    fn from(e: minijinja::Error) -> Self {
        Self::Render(e.to_string())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "web request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
