//! Chat-bot transport.
//!
//! Everything the relay says to Telegram goes through [`MessageTransport`]:
//! plain text, prompts with inline buttons, message deletion and callback
//! acknowledgement. Each call is a single request with no retry.

pub mod messages;
pub mod recording;
pub mod telegram;

pub use recording::{RecordingTransport, SentMessage};
pub use telegram::TelegramTransport;

use async_trait::async_trait;

use crate::errors::AppError;

/// An inline button: the label shown to the moderator and the opaque data
/// sent back in the callback when it is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptAction {
    pub label: String,
    pub action_id: String,
}

impl PromptAction {
    pub fn new(label: impl Into<String>, action_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action_id: action_id.into(),
        }
    }
}

#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Send an HTML formatted message, returning its message id.
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<i32, AppError>;

    /// Send an HTML formatted message with one row of inline buttons.
    async fn send_prompt(
        &self,
        chat_id: i64,
        text: &str,
        actions: &[PromptAction],
    ) -> Result<i32, AppError>;

    async fn delete_message(&self, chat_id: i64, message_id: i32) -> Result<(), AppError>;

    /// Stops the loading indicator on the client that pressed the button.
    async fn acknowledge_callback(&self, callback_id: &str) -> Result<(), AppError>;
}
