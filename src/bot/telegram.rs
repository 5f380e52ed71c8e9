use async_trait::async_trait;
use reqwest::Url;
use teloxide::{
    Bot,
    payloads::{SendMessageSetters, SetWebhookSetters},
    prelude::{Request, Requester},
    types::{
        CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode,
    },
};

use super::{MessageTransport, PromptAction};
use crate::errors::AppError;

#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(token: &str) -> Self {
        Self {
            bot: Bot::new(token),
        }
    }

    /// Points Telegram at our `/webhook` endpoint.
    pub async fn register_webhook(&self, url: Url, secret: Option<&str>) -> Result<(), AppError> {
        let mut request = self.bot.set_webhook(url.clone());
        if let Some(secret) = secret {
            request = request.secret_token(secret.to_string());
        }
        request.send().await?;

        tracing::info!("Registered webhook at {}", url);
        Ok(())
    }
}

#[async_trait]
impl MessageTransport for TelegramTransport {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<i32, AppError> {
        let message = self
            .bot
            .send_message(ChatId(chat_id), text)
            .parse_mode(ParseMode::Html)
            .send()
            .await?;

        Ok(message.id.0)
    }

    async fn send_prompt(
        &self,
        chat_id: i64,
        text: &str,
        actions: &[PromptAction],
    ) -> Result<i32, AppError> {
        let buttons = actions
            .iter()
            .map(|action| InlineKeyboardButton::callback(&action.label, &action.action_id))
            .collect::<Vec<_>>();
        let keyboard = InlineKeyboardMarkup::new(vec![buttons]);

        let message = self
            .bot
            .send_message(ChatId(chat_id), text)
            .parse_mode(ParseMode::Html)
            .reply_markup(keyboard)
            .send()
            .await?;

        Ok(message.id.0)
    }

    async fn delete_message(&self, chat_id: i64, message_id: i32) -> Result<(), AppError> {
        self.bot
            .delete_message(ChatId(chat_id), MessageId(message_id))
            .send()
            .await?;
        Ok(())
    }

    async fn acknowledge_callback(&self, callback_id: &str) -> Result<(), AppError> {
        self.bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()))
            .send()
            .await?;
        Ok(())
    }
}
