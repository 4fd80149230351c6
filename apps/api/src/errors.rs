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
    #[error("Validation error: {0}")]
    Validation(String),

    /// Covers both a genuinely absent record and an ownership mismatch. The
    /// two must stay indistinguishable to the caller so that probing an id
    /// reveals nothing about other users' records.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{message}: {source}")]
    Store {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Wraps a persistence failure with the message reported to the client.
    pub fn store(message: impl Into<String>, source: sqlx::Error) -> Self {
        AppError::Store {
            message: message.into(),
            source,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(source: sqlx::Error) -> Self {
        AppError::store("Database operation failed", source)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "message": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "message": "Authentication required" }),
            ),
            AppError::Store { message, source } => {
                tracing::error!("Store error: {message}: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": message, "error": source.to_string() }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "An internal server error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
