//! A transport that records every call instead of talking to Telegram.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{MessageTransport, PromptAction};
use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentMessage {
    Text {
        chat_id: i64,
        text: String,
    },
    Prompt {
        chat_id: i64,
        text: String,
        actions: Vec<PromptAction>,
    },
    Deleted {
        chat_id: i64,
        message_id: i32,
    },
    Acknowledged {
        callback_id: String,
    },
}

#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<SentMessage>>,
    next_message_id: AtomicI32,
    failing: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose every call fails, as if Telegram were unreachable.
    pub fn failing() -> Self {
        let transport = Self::default();
        transport.set_failing(true);
        transport
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().await.clone()
    }

    pub async fn texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .await
            .iter()
            .filter_map(|m| match m {
                SentMessage::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    async fn record(&self, message: SentMessage) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::TransportError("transport unavailable".into()));
        }
        self.sent.lock().await.push(message);
        Ok(())
    }

    fn next_id(&self) -> i32 {
        self.next_message_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl MessageTransport for RecordingTransport {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<i32, AppError> {
        self.record(SentMessage::Text {
            chat_id,
            text: text.to_string(),
        })
        .await?;
        Ok(self.next_id())
    }

    async fn send_prompt(
        &self,
        chat_id: i64,
        text: &str,
        actions: &[PromptAction],
    ) -> Result<i32, AppError> {
        self.record(SentMessage::Prompt {
            chat_id,
            text: text.to_string(),
            actions: actions.to_vec(),
        })
        .await?;
        Ok(self.next_id())
    }

    async fn delete_message(&self, chat_id: i64, message_id: i32) -> Result<(), AppError> {
        self.record(SentMessage::Deleted {
            chat_id,
            message_id,
        })
        .await
    }

    async fn acknowledge_callback(&self, callback_id: &str) -> Result<(), AppError> {
        self.record(SentMessage::Acknowledged {
            callback_id: callback_id.to_string(),
        })
        .await
    }
}
