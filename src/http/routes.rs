use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        index_handler, notify_handler, send_for_approval_handler, submit_review_handler,
        webhook_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/notify", post(notify_handler))
        .route("/reviews", post(submit_review_handler))
        .route("/send-for-approval", post(send_for_approval_handler))
        .route("/webhook", post(webhook_handler))
        .with_state(state)
}
