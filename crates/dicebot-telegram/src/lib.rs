//! Telegram adapter (plain HTTP over `reqwest`).
//!
//! This crate implements the `dicebot-core` [`BotApi`] port over the Telegram Bot API.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

pub mod transport;

use dicebot_core::{
    domain::ChatId,
    errors::Error,
    messaging::{
        port::BotApi,
        types::{from_value, Message, Update, User},
    },
    Result,
};

use crate::transport::unwrap_envelope;

#[derive(Clone)]
pub struct TelegramClient {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Keep the token out of logs.
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// `base_url` is the API root, e.g. `https://api.telegram.org`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("dicebot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::External(format!("http client build error: {e}")))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            http,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.base_url, self.token)
    }

    /// GET `method` with query `params` and return the envelope's `result`.
    pub async fn call(&self, method: &str, params: &[(&str, String)]) -> Result<Value> {
        debug!(method, params = params.len(), "telegram request");

        let resp = self
            .http
            .get(self.method_url(method))
            .query(params)
            .send()
            .await
            // reqwest errors embed the URL, which carries the token.
            .map_err(|e| Error::External(format!("telegram request error: {}", e.without_url())))?;

        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::External(format!("telegram body error: {}", e.without_url())))?;

        debug!(method, status, bytes = body.len(), "telegram response");
        unwrap_envelope(method, status, &body)
    }
}

#[async_trait]
impl BotApi for TelegramClient {
    async fn get_me(&self) -> Result<User> {
        from_value(self.call("getMe", &[]).await?)
    }

    async fn get_updates(&self) -> Result<Vec<Update>> {
        from_value(self.call("getUpdates", &[]).await?)
    }

    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<Message> {
        let params = [
            ("chat_id", chat_id.0.to_string()),
            ("text", text.to_string()),
        ];
        from_value(self.call("sendMessage", &params).await?)
    }

    async fn send_dice(&self, chat_id: ChatId) -> Result<Message> {
        let params = [("chat_id", chat_id.0.to_string())];
        from_value(self.call("sendDice", &params).await?)
    }
}
