use std::env;

use crate::{errors::Error, Result};

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Typed configuration for the bot.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,
    pub telegram_api_url: String,
    pub reply: ReplyConfig,
}

/// What the bot sends back to every distinct sender.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyConfig {
    /// Text sent before the dice. `None` keeps the text reply off.
    pub text: Option<String>,
    pub send_dice: bool,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            text: None,
            send_dice: true,
        }
    }
}

impl Config {
    /// Load from the process environment, after merging `.env` if present.
    pub fn load() -> Result<Self> {
        // Existing variables win over `.env`.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(Error::Config(format!("failed to read .env: {e}")));
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let telegram_bot_token = lookup("TELEGRAM_BOT_TOKEN")
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        if telegram_bot_token.is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let telegram_api_url = lookup("TELEGRAM_API_URL")
            .and_then(non_empty)
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string());

        let text = lookup("DICEBOT_REPLY_TEXT").and_then(non_empty);
        let send_dice = match lookup("DICEBOT_SEND_DICE") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                Error::Config(format!("DICEBOT_SEND_DICE is not a boolean: {raw:?}"))
            })?,
            None => true,
        };

        Ok(Self {
            telegram_bot_token,
            telegram_api_url,
            reply: ReplyConfig { text, send_dice },
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
