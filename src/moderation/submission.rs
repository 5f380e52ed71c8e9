use crate::{
    bot::messages::{approval_actions, approval_prompt},
    errors::AppError,
    models::{Review, ReviewSubmission},
    state::AppState,
};

/// Validate a submission and present the matching pending review to the
/// moderators.
///
/// When the body carries an `id` that exact pending review is used.
/// Without one we fall back to the newest pending row, which is only right
/// if nobody else submitted in between; callers that can should go through
/// [`submit_review`] or pass the id.
pub async fn send_for_approval(
    state: &AppState,
    submission: ReviewSubmission,
) -> Result<Review, AppError> {
    let requested_id = submission.id;
    submission.validate()?;

    let review = match requested_id {
        Some(id) => state.store.get_pending(id).await?,
        None => state.store.latest_pending().await?,
    }
    .ok_or_else(|| match requested_id {
        Some(id) => AppError::NotFound(format!("Pending review {} not found", id)),
        None => AppError::NotFound("No pending review found".into()),
    })?;

    prompt_moderators(state, &review).await?;
    Ok(review)
}

/// Store a new review as pending and prompt the moderators with exactly
/// that review.
pub async fn submit_review(
    state: &AppState,
    submission: ReviewSubmission,
) -> Result<Review, AppError> {
    let new_review = submission.validate()?;
    let review = state.store.insert_pending(new_review).await?;

    prompt_moderators(state, &review).await?;
    Ok(review)
}

async fn prompt_moderators(state: &AppState, review: &Review) -> Result<(), AppError> {
    let message_id = state
        .moderator_bot
        .send_prompt(
            state.config.approval_chat_id,
            &approval_prompt(review),
            &approval_actions(review.id),
        )
        .await
        .inspect_err(|e| {
            tracing::error!("Failed to send approval prompt for review {}: {}", review.id, e)
        })?;

    tracing::info!(
        "Sent review {} ({}) for approval as message {}",
        review.id,
        review.elective_code,
        message_id
    );
    Ok(())
}
