use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::{HandlerError, StatusBody, json_body};
use crate::{models::NotifyPayload, moderation::announce, state::AppState};

/// Announce a review publicly without going through moderation.
pub async fn notify_handler(
    State(state): State<AppState>,
    payload: Result<Json<NotifyPayload>, JsonRejection>,
) -> Result<Json<StatusBody>, HandlerError> {
    let announcement = json_body(payload)?.validate().map_err(|e| {
        tracing::warn!("Invalid notify request: {}", e);
        e.to_response()
    })?;

    announce(&state, &announcement).await.map_err(|e| {
        tracing::error!("Error sending notification: {}", e);
        e.to_response()
    })?;

    Ok(Json(StatusBody {
        status: "Message sent",
        id: None,
    }))
}
