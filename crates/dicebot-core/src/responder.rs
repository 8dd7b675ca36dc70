//! One pass of the bot: read recent updates, print them, reply to every sender.

use std::{collections::HashSet, io::Write};

use tracing::{debug, info};

use crate::{
    config::ReplyConfig,
    domain::{ChatId, UserId},
    formatting::{sent_message_line, transcript_line},
    messaging::{port::BotApi, types::Update},
    Result,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub updates: usize,
    pub senders: usize,
    pub dice_sent: usize,
    pub messages_sent: usize,
}

/// Distinct sender ids in first-seen order.
pub fn distinct_senders(updates: &[Update]) -> Vec<UserId> {
    let mut seen = HashSet::new();
    updates
        .iter()
        .map(Update::sender)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Fetch updates, write the transcript to `out`, then reply to each sender.
///
/// Any API failure aborts the run; replies already sent stay sent.
pub async fn run_once<A, W>(api: &A, reply: &ReplyConfig, out: &mut W) -> Result<RunSummary>
where
    A: BotApi + ?Sized,
    W: Write,
{
    let updates = api.get_updates().await?;
    let senders = distinct_senders(&updates);
    info!(
        updates = updates.len(),
        senders = senders.len(),
        "fetched recent updates"
    );

    for update in &updates {
        writeln!(out, "{}", transcript_line(update))?;
    }
    out.flush()?;

    let mut summary = RunSummary {
        updates: updates.len(),
        senders: senders.len(),
        ..RunSummary::default()
    };

    // Chat id is the id of the user we're replying to.
    for user_id in senders {
        let chat_id = ChatId::from(user_id);

        if let Some(text) = &reply.text {
            let sent = api.send_message(chat_id, text).await?;
            writeln!(out, "{}", sent_message_line(&sent))?;
            summary.messages_sent += 1;
        }

        if reply.send_dice {
            let sent = api.send_dice(chat_id).await?;
            debug!(chat_id = chat_id.0, message_id = sent.message_id.0, "dice sent");
            summary.dice_sent += 1;
        }
    }
    out.flush()?;

    Ok(summary)
}
