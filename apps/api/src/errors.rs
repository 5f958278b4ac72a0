use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Nothing here is retried or recovered: every failure surfaces directly to
/// the caller with a human-readable message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Error extracting text from PDF: {0}")]
    Extraction(String),

    #[error("Completion API error (status {status}): {body}")]
    UpstreamApi { status: u16, body: String },

    #[error("Error communicating with completion API: {0}")]
    UpstreamNetwork(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Api { status, body } => AppError::UpstreamApi { status, body },
            LlmError::Http(e) => AppError::UpstreamNetwork(e.to_string()),
            LlmError::Parse(e) => {
                AppError::Internal(anyhow::anyhow!("invalid completion response body: {e}"))
            }
            LlmError::EmptyContent => {
                AppError::Internal(anyhow::anyhow!("completion returned no content"))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Extraction(_) => (StatusCode::INTERNAL_SERVER_ERROR, "EXTRACTION_ERROR"),
            AppError::UpstreamApi { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_ERROR"),
            AppError::UpstreamNetwork(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_UNREACHABLE")
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        if status.is_server_error() {
            tracing::error!("{self}");
        }

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}
