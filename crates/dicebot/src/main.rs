use std::io;

use anyhow::Context;
use tracing::info;

use dicebot_core::{config::Config, responder};
use dicebot_telegram::TelegramClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dicebot_core::logging::init("dicebot")?;

    let cfg = Config::load().context("loading configuration")?;
    let client = TelegramClient::new(&cfg.telegram_api_url, &cfg.telegram_bot_token)
        .context("building telegram client")?;

    let mut out = io::stdout().lock();
    let summary = responder::run_once(&client, &cfg.reply, &mut out)
        .await
        .context("replying to recent senders")?;

    info!(
        updates = summary.updates,
        senders = summary.senders,
        dice_sent = summary.dice_sent,
        messages_sent = summary.messages_sent,
        "run complete"
    );

    Ok(())
}
