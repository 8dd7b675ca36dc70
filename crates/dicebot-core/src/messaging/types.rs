use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    domain::{ChatId, MessageId, UpdateId, UserId},
    Result,
};

/// Map a raw JSON value (an envelope `result`) into a typed record.
///
/// Missing required fields fail with [`crate::Error::Json`]; optional fields
/// become `None`.
pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// A Telegram user or bot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UserFields")]
pub struct User {
    pub id: UserId,
    pub is_bot: bool,
    pub first_name: String,
    /// Absent e.g. for bots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub username: String,
    /// Always a copy of `username`; Telegram's own `language_code` is ignored.
    pub language_code: String,
}

/// Wire shape of [`User`] before `language_code` is filled in.
#[derive(Deserialize)]
struct UserFields {
    id: UserId,
    is_bot: bool,
    first_name: String,
    #[serde(default)]
    last_name: Option<String>,
    username: String,
}

impl From<UserFields> for User {
    fn from(f: UserFields) -> Self {
        Self {
            id: f.id,
            is_bot: f.is_bot,
            first_name: f.first_name,
            last_name: f.last_name,
            language_code: f.username.clone(),
            username: f.username,
        }
    }
}

/// A Telegram chat. For private chats this mirrors the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub username: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: MessageId,
    #[serde(rename = "from")]
    pub from_user: User,
    pub chat: Chat,
    /// Seconds since the Unix epoch.
    pub date: i64,
    /// Absent for non-text messages (stickers, dice, photos).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Message {
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.date, 0)
    }
}

/// One event from `getUpdates`. Only message updates are modelled; any other
/// kind fails to map because `message` is missing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub update_id: UpdateId,
    pub message: Message,
}

impl Update {
    pub fn sender(&self) -> UserId {
        self.message.from_user.id
    }
}
