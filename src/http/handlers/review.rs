use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::{HandlerError, StatusBody, json_body};
use crate::{
    models::ReviewSubmission,
    moderation::{send_for_approval, submit_review},
    state::AppState,
};

pub async fn send_for_approval_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReviewSubmission>, JsonRejection>,
) -> Result<Json<StatusBody>, HandlerError> {
    let submission = json_body(payload)?;

    match send_for_approval(&state, submission).await {
        Ok(review) => Ok(Json(StatusBody {
            status: "Sent for approval",
            id: Some(review.id),
        })),
        Err(err) => {
            tracing::error!("Error sending review for approval: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn submit_review_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReviewSubmission>, JsonRejection>,
) -> Result<Json<StatusBody>, HandlerError> {
    let submission = json_body(payload)?;

    let review = submit_review(&state, submission).await.map_err(|e| {
        tracing::error!("Error submitting review: {}", e);
        e.to_response()
    })?;

    Ok(Json(StatusBody {
        status: "Sent for approval",
        id: Some(review.id),
    }))
}
