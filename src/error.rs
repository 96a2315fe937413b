//! Application error type and its HTTP translation.
//!
//! Every failure raised anywhere in a handler chain converges on
//! [`AppError`]; the [`IntoResponse`] impl is the single place that maps a
//! failure to a status code and the wire shape `{"error": "<message>"}`.
//! Failures are always logged server-side before the response is written.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body failed schema validation (HTTP 400).
    #[error("{0}")]
    Validation(String),

    /// Path- or body-supplied identifier is malformed (HTTP 400).
    /// Distinct from [`AppError::NotFound`]: a malformed id never reaches
    /// the store.
    #[error("{0}")]
    InvalidId(String),

    /// Well-formed identifier with no matching entity (HTTP 404).
    #[error("{0}")]
    NotFound(String),

    /// No route matches the request (HTTP 404).
    #[error("Route not found")]
    RouteNotFound,

    /// Unexpected failure, e.g. the store is unavailable (HTTP 500).
    /// The carried detail is logged, never sent to the client.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_id() -> Self {
        Self::InvalidId("Invalid ID".to_string())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                "Internal Server Error".to_string()
            }
            other => {
                tracing::warn!(status = status.as_u16(), error = %other, "request failed");
                other.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(format!("database error: {e}"))
    }
}
