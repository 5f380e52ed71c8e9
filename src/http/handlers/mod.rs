pub mod notify;
pub mod review;
pub mod webhook;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
};
use serde::Serialize;

use crate::errors::{AppError, ErrorBody};

pub use notify::notify_handler;
pub use review::{send_for_approval_handler, submit_review_handler};
pub use webhook::webhook_handler;

pub type HandlerError = (StatusCode, Json<ErrorBody>);

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

pub async fn index_handler() -> &'static str {
    "Review relay is running."
}

/// Turn a body that failed to parse into our `{"error": ...}` 400.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, HandlerError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        AppError::ValidationError(rejection.body_text()).to_response()
    })
}
