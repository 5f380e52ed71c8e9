use crate::{
    bot::messages::public_announcement,
    errors::AppError,
    models::{Announcement, Review},
    state::AppState,
};

/// Send the "new review" message to the public chat.
pub async fn announce(state: &AppState, announcement: &Announcement) -> Result<(), AppError> {
    let text = public_announcement(announcement, &state.config.module_base_url);

    state
        .public_bot
        .send_text(state.config.public_chat_id, &text)
        .await?;

    tracing::info!(
        "Announced review for {} in chat {}",
        announcement.elective_code,
        state.config.public_chat_id
    );
    Ok(())
}

/// Announce an approved review. The approval has already been committed,
/// so a failed broadcast is logged and not returned.
pub async fn announce_approved(state: &AppState, review: &Review) {
    if let Err(e) = announce(state, &Announcement::from(review)).await {
        tracing::error!(
            "Review {} approved but public announcement failed: {}",
            review.id,
            e
        );
    }
}
