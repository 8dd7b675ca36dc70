/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type so the entry point
/// reports every failure the same way.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no usable payload from {method}: http status {status}")]
    NoPayload { method: String, status: u16 },

    #[error("missing field `{0}` in response envelope")]
    MissingField(&'static str),

    #[error("telegram is down: {method}: {description}")]
    ServiceUnavailable { method: String, description: String },

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
