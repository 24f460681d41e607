//! Application error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Application errors, mapped onto the API's status-code taxonomy.
#[derive(Debug, Error)]
pub enum AppError {
    /// Infrastructure failure. Logged server-side, never detailed to clients.
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound,

    /// Authentication failed. The cause is deliberately not distinguished.
    #[error("unauthorized")]
    Unauthorized,

    /// The request was syntactically valid but failed validation.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Credential store failure. Logged server-side like `Internal`.
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal server error");
                "internal server error".to_string()
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "database error");
                "internal server error".to_string()
            }
            AppError::BadRequest(msg) => msg.clone(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
