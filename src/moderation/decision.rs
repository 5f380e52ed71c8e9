use crate::{
    bot::messages::{approved_reply, not_found_reply, rejected_reply},
    errors::AppError,
    models::{CallbackEvent, Decision, Review, ReviewAction},
    moderation::notifier::announce_approved,
    state::AppState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionOutcome {
    Approved(Review),
    Rejected(i64),
    NotFound(i64),
}

/// Resolve a moderator button press.
///
/// Store failures abort before any reply is sent. Once the transition is
/// decided, deleting the prompt, replying and answering the callback are
/// best effort.
pub async fn handle_callback(
    state: &AppState,
    event: &CallbackEvent,
) -> Result<DecisionOutcome, AppError> {
    let decision = match event.data.parse::<Decision>() {
        Ok(decision) => decision,
        Err(e) => {
            acknowledge(state, event).await;
            return Err(e);
        }
    };

    let outcome = apply(state, decision).await?;

    let reply = match &outcome {
        DecisionOutcome::Approved(review) => approved_reply(review),
        DecisionOutcome::Rejected(id) => rejected_reply(*id),
        DecisionOutcome::NotFound(id) => not_found_reply(*id),
    };

    if let Some((chat_id, message_id)) = event.prompt {
        if let Err(e) = state.moderator_bot.delete_message(chat_id, message_id).await {
            tracing::warn!("Failed to delete prompt {} in chat {}: {}", message_id, chat_id, e);
        }
    }

    if let Err(e) = state
        .moderator_bot
        .send_text(state.config.approval_chat_id, &reply)
        .await
    {
        tracing::warn!("Failed to reply to moderators: {}", e);
    }

    acknowledge(state, event).await;

    if let DecisionOutcome::Approved(review) = &outcome {
        announce_approved(state, review).await;
    }

    Ok(outcome)
}

async fn apply(state: &AppState, decision: Decision) -> Result<DecisionOutcome, AppError> {
    let id = decision.review_id;

    match decision.action {
        ReviewAction::Approve => {
            let Some(review) = state.store.get_pending(id).await? else {
                tracing::info!("Approve for review {} ignored: not pending", id);
                return Ok(DecisionOutcome::NotFound(id));
            };

            if !state.store.approve(&review).await? {
                tracing::info!("Approve for review {} lost a race: no longer pending", id);
                return Ok(DecisionOutcome::NotFound(id));
            }

            tracing::info!("Review {} ({}) approved", id, review.elective_code);
            Ok(DecisionOutcome::Approved(review))
        }
        ReviewAction::Reject => {
            let removed = state.store.delete_pending(id).await?;
            tracing::info!("Review {} rejected (row removed: {})", id, removed);
            Ok(DecisionOutcome::Rejected(id))
        }
    }
}

async fn acknowledge(state: &AppState, event: &CallbackEvent) {
    if let Err(e) = state
        .moderator_bot
        .acknowledge_callback(&event.callback_id)
        .await
    {
        tracing::warn!("Failed to answer callback {}: {}", event.callback_id, e);
    }
}
