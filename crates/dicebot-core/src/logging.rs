use crate::Result;

/// Initialize tracing for the bot.
///
/// Logs go to stderr; stdout carries the transcript.
pub fn init(service_name: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    // Default: info for our crates, warn for everything else.
    // Can be overridden with `RUST_LOG`.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,{service_name}=info,dicebot_core=info,dicebot_telegram=info"
        ))
    });

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    // A second init keeps the first subscriber.
    if let Err(e) = installed {
        tracing::debug!("logger already installed: {e}");
    }

    Ok(())
}
