use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Rate limit exceeded. Please wait {wait_secs} seconds.")]
    RateLimited { wait_secs: u64 },

    #[error("Request timeout")]
    Timeout,

    /// The remote model answered, but not with a usable portfolio.
    #[error("{0}")]
    MalformedResponse(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("{0}")]
    Export(String),

    #[error("AI features are not configured. Set ANTHROPIC_API_KEY to enable them.")]
    Unavailable,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::RateLimited { .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                self.to_string(),
            ),
            AppError::Timeout => {
                tracing::warn!("Request timed out");
                (StatusCode::GATEWAY_TIMEOUT, "TIMEOUT", self.to_string())
            }
            AppError::MalformedResponse(msg) => {
                tracing::warn!("Malformed model response: {msg}");
                (StatusCode::BAD_GATEWAY, "MALFORMED_RESPONSE", msg.clone())
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Export(msg) => {
                tracing::error!("Export error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "EXPORT_ERROR", msg.clone())
            }
            AppError::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "UNAVAILABLE",
                self.to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
