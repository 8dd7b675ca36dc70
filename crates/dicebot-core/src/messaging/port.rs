use async_trait::async_trait;

use crate::{
    domain::ChatId,
    messaging::types::{Message, Update, User},
    Result,
};

/// The Telegram Bot API operations the bot uses.
///
/// `dicebot-telegram` implements this over HTTP; tests use in-memory fakes.
#[async_trait]
pub trait BotApi: Send + Sync {
    /// `getMe`: the bot's own account.
    async fn get_me(&self) -> Result<User>;

    /// `getUpdates` without an offset, in the order Telegram returns them.
    ///
    /// Nothing is acknowledged, so consecutive calls can return the same updates.
    async fn get_updates(&self) -> Result<Vec<Update>>;

    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<Message>;

    async fn send_dice(&self, chat_id: ChatId) -> Result<Message>;
}
