use axum::{Json, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Telegram error: {0}")]
    TransportError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Server error: {0}")]
    ServerError(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::TransportError(_)
            | AppError::DatabaseError(_)
            | AppError::EnvError(_)
            | AppError::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> (StatusCode, Json<ErrorBody>) {
        let message = match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::Unauthorized(msg)
            | AppError::TransportError(msg)
            | AppError::DatabaseError(msg)
            | AppError::EnvError(msg)
            | AppError::ServerError(msg) => msg.clone(),
        };

        (self.status(), Json(ErrorBody { error: message }))
    }
}

impl From<teloxide::RequestError> for AppError {
    fn from(err: teloxide::RequestError) -> Self {
        AppError::TransportError(err.to_string())
    }
}
