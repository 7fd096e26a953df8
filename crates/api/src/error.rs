use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use beardai_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Catalog failures come from operator-controlled manifests, never from the
/// request, so they all surface as 500s. The detailed cause is logged and
/// kept out of the response body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A catalog loading or validation error from `beardai_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = match &self {
            AppError::Core(err) => {
                tracing::error!(error = %err, "Style catalog error");
                "CATALOG_ERROR"
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                "INTERNAL_ERROR"
            }
        };

        let body = json!({
            "error": "An internal error occurred",
            "code": code,
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
