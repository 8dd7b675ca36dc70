//! Transcript formatting (what the bot prints to stdout).

use crate::messaging::types::{Message, Update};

/// Printed in place of a missing message text.
pub const MISSING_TEXT: &str = "None";

/// `HH:MM:SS` in UTC, or `??:??:??` for a timestamp chrono cannot represent.
pub fn utc_clock(message: &Message) -> String {
    message
        .sent_at()
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "??:??:??".to_string())
}

/// One transcript line: `12:00:00 username: text`.
pub fn transcript_line(update: &Update) -> String {
    let msg = &update.message;
    format!(
        "{} {}: {}",
        utc_clock(msg),
        msg.from_user.username,
        msg.text.as_deref().unwrap_or(MISSING_TEXT)
    )
}

/// Confirmation printed after a text reply went out.
pub fn sent_message_line(sent: &Message) -> String {
    format!(
        "Bot sent message to {} ({}): {}",
        sent.chat.first_name,
        sent.chat.username,
        sent.text.as_deref().unwrap_or(MISSING_TEXT)
    )
}
