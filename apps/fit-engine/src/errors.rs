use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::matching::EngineError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Engine(EngineError::MalformedExtraction) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MALFORMED_EXTRACTION",
                self.to_string(),
            ),
            AppError::Engine(EngineError::InsufficientSignal) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INSUFFICIENT_SIGNAL",
                self.to_string(),
            ),
            AppError::Engine(e) => {
                tracing::error!("Engine error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ENGINE_ERROR",
                    "The scoring engine is misconfigured".to_string(),
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
