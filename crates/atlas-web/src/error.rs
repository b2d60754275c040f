use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use atlas_core::error::CoreError;

/// All errors that can surface from the request lifecycle.
///
/// Slug misses are not errors; handlers turn them into a redirect to the
/// listing page. Everything that reaches `IntoResponse` here is an
/// unrecoverable request failure: the detail is logged and the client gets
/// a generic 500 so dataset paths never leak.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
