use std::{fmt, str::FromStr};

use teloxide::types::CallbackQuery;

use crate::errors::AppError;

/// A moderator button press, detached from the wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackEvent {
    pub callback_id: String,
    pub data: String,
    /// Chat and message id of the prompt being resolved.
    pub prompt: Option<(i64, i32)>,
}

impl From<CallbackQuery> for CallbackEvent {
    fn from(query: CallbackQuery) -> Self {
        Self {
            callback_id: query.id.0,
            data: query.data.unwrap_or_default(),
            prompt: query.message.map(|m| (m.chat().id.0, m.id().0)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewAction::Approve => "approve",
            ReviewAction::Reject => "reject",
        }
    }

    /// Callback data carried by the prompt button, e.g. `approve|12`.
    pub fn callback_data(&self, review_id: i64) -> String {
        format!("{}|{}", self.as_str(), review_id)
    }
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: ReviewAction,
    pub review_id: i64,
}

impl FromStr for Decision {
    type Err = AppError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let (action, id) = data
            .split_once('|')
            .ok_or_else(|| AppError::ValidationError(format!("Malformed callback data: {data}")))?;

        let action = match action {
            "approve" => ReviewAction::Approve,
            "reject" => ReviewAction::Reject,
            other => {
                return Err(AppError::ValidationError(format!(
                    "Unknown action: {other}"
                )));
            }
        };

        let review_id = id
            .parse::<i64>()
            .map_err(|_| AppError::ValidationError(format!("Invalid review id: {id}")))?;

        Ok(Decision { action, review_id })
    }
}
