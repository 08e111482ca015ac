use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::model::ModelError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Model or schema artifacts failed to load at startup. Carries the
    /// instructional message shown to the user.
    #[error("Model not ready: {0}")]
    NotReady(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::FeatureWidth { .. } => AppError::SchemaMismatch(err.to_string()),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotReady(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::SchemaMismatch(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message that is safe to show to an end user.
    pub fn public_message(&self) -> String {
        match self {
            AppError::NotReady(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::SchemaMismatch(_) => {
                "The model does not accept the configured feature columns".to_string()
            }
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = match &self {
            AppError::NotReady(_) => "MODEL_NOT_READY",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::SchemaMismatch(msg) => {
                tracing::error!("Schema mismatch: {msg}");
                "SCHEMA_MISMATCH"
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "INTERNAL_ERROR"
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.public_message()
            }
        }));

        (self.status(), body).into_response()
    }
}
