//! Error types for the API layer.
//!
//! [`ApiError`] is the typed failure value handlers return; its
//! [`IntoResponse`](axum::response::IntoResponse) implementation is the
//! only place a store failure becomes a protocol status code and body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tasklist_store::StoreError;

/// Errors that can occur in the API layer.
///
/// Request-shape problems (malformed JSON bodies, non-integer query or
/// path parameters) never reach this type; Axum's extractors reject them
/// with 400/422 before a handler runs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested item does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::NotFound(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The full error (with the requested index) goes to the log; the
        // wire detail is a fixed message.
        let (status, detail) = match &self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Item not found"),
        };

        tracing::debug!(error = %self, status = status.as_u16(), "request failed");

        let body = serde_json::json!({ "detail": detail });
        (status, axum::Json(body)).into_response()
    }
}
