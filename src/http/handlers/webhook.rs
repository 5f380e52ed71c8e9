use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use teloxide::types::{Update, UpdateKind};

use super::StatusBody;
use crate::{
    errors::AppError,
    models::CallbackEvent,
    moderation::handle_callback,
    state::AppState,
};

pub const SECRET_TOKEN_HEADER: &str = "x-telegram-bot-api-secret-token";

/// Telegram update endpoint.
///
/// Answers `{"status": "OK"}` whatever happens inside, so Telegram never
/// redelivers an update because our handling failed. The only exception is
/// a missing or wrong secret token when one is configured.
pub async fn webhook_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Some(expected) = state.config.webhook_secret.as_deref() {
        let provided = headers
            .get(SECRET_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok());
        if provided != Some(expected) {
            tracing::warn!("Webhook call with invalid secret token rejected");
            return AppError::Unauthorized("Invalid webhook secret".into())
                .to_response()
                .into_response();
        }
    }

    match serde_json::from_slice::<Update>(&body) {
        Ok(update) => process_update(&state, update).await,
        Err(e) => tracing::warn!("Ignoring malformed webhook body: {}", e),
    }

    Json(StatusBody {
        status: "OK",
        id: None,
    })
    .into_response()
}

async fn process_update(state: &AppState, update: Update) {
    let UpdateKind::CallbackQuery(query) = update.kind else {
        tracing::debug!("Ignoring update {:?} without callback query", update.id);
        return;
    };

    let event = CallbackEvent::from(query);
    match handle_callback(state, &event).await {
        Ok(outcome) => tracing::debug!("Update {:?} resolved: {:?}", update.id, outcome),
        Err(e) => tracing::error!("Failed to handle callback {:?}: {}", event.data, e),
    }
}
