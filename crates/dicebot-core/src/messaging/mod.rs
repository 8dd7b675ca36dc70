//! Telegram records and the port the API adapter implements.

pub mod port;
pub mod types;
