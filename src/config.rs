use std::str::FromStr;

use reqwest::Url;
use sqlx::postgres::PgConnectOptions;

use crate::errors::AppError;

pub const DEFAULT_PORT: u16 = 5002;
pub const DEFAULT_MODULE_BASE_URL: &str = "https://sp-elective-site-frontend.vercel.app/modules";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Runtime configuration, read once at startup and shared through `AppState`.
///
/// Not `Debug`: it carries both bot tokens.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub database: PgConnectOptions,
    /// Bot that shows prompts to moderators and receives their callbacks.
    pub approval_bot_token: String,
    pub approval_chat_id: i64,
    /// Bot that announces approved reviews.
    pub public_bot_token: String,
    pub public_chat_id: i64,
    pub module_base_url: Url,
    pub allowed_origins: Vec<String>,
    /// Public URL of `/webhook`; registered with Telegram on startup if set.
    pub webhook_url: Option<Url>,
    /// Expected `X-Telegram-Bot-Api-Secret-Token` on inbound webhooks.
    pub webhook_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);
        let var = |key: &str| vars.get(key);

        let port = match var("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| AppError::EnvError("PORT must be a valid number".into()))?,
            None => DEFAULT_PORT,
        };

        let database = match var("DATABASE_URL") {
            Some(url) => PgConnectOptions::from_str(&url)
                .map_err(|e| AppError::EnvError(format!("DATABASE_URL is invalid: {}", e)))?,
            None => {
                let mut options = PgConnectOptions::new()
                    .host(&vars.required(&["DB_HOST"])?)
                    .username(&vars.required(&["DB_USER"])?)
                    .password(&vars.required(&["DB_PASSWORD"])?)
                    .database(&vars.required(&["DB_NAME"])?);
                if let Some(db_port) = var("DB_PORT") {
                    let db_port = db_port
                        .parse::<u16>()
                        .map_err(|_| AppError::EnvError("DB_PORT must be a valid number".into()))?;
                    options = options.port(db_port);
                }
                options
            }
        };

        let module_base_url = var("MODULE_BASE_URL")
            .unwrap_or_else(|| DEFAULT_MODULE_BASE_URL.to_string());
        let module_base_url = Url::parse(&module_base_url)
            .map_err(|e| AppError::EnvError(format!("MODULE_BASE_URL is invalid: {}", e)))?;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let webhook_url = var("WEBHOOK_URL")
            .map(|url| Url::parse(&url))
            .transpose()
            .map_err(|e| AppError::EnvError(format!("WEBHOOK_URL is invalid: {}", e)))?;

        Ok(Config {
            port,
            database,
            approval_bot_token: vars.required(&["APPROVAL_BOT_TOKEN"])?,
            approval_chat_id: vars.chat_id(&["APPROVAL_CHAT_ID"])?,
            public_bot_token: vars.required(&["PUBLIC_BOT_TOKEN", "TOKEN"])?,
            public_chat_id: vars.chat_id(&["PUBLIC_CHAT_ID", "CHAT_ID"])?,
            module_base_url,
            allowed_origins,
            webhook_url,
            webhook_secret: var("WEBHOOK_SECRET"),
        })
    }
}

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    // First of `keys` that is set wins; later keys are legacy names.
    fn required(&self, keys: &[&str]) -> Result<String, AppError> {
        keys.iter()
            .find_map(|key| self.get(key))
            .ok_or_else(|| AppError::EnvError(format!("{} must be set", keys.join(" or "))))
    }

    fn chat_id(&self, keys: &[&str]) -> Result<i64, AppError> {
        self.required(keys)?
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::EnvError(format!("{} must be a chat id", keys[0])))
    }
}
