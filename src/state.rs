use std::sync::Arc;

use crate::{bot::MessageTransport, config::Config, db::ReviewStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReviewStore>,
    /// Approval bot: prompts, replies, prompt cleanup and callback answers.
    pub moderator_bot: Arc<dyn MessageTransport>,
    /// Public bot: announcements only.
    pub public_bot: Arc<dyn MessageTransport>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ReviewStore>,
        moderator_bot: Arc<dyn MessageTransport>,
        public_bot: Arc<dyn MessageTransport>,
        config: Config,
    ) -> Self {
        Self {
            store,
            moderator_bot,
            public_bot,
            config: Arc::new(config),
        }
    }
}
