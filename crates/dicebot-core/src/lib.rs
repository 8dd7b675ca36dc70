//! Core domain + application logic for the dice bot.
//!
//! This crate is framework-agnostic. The Telegram HTTP API lives behind the
//! [`messaging::port::BotApi`] port, implemented in `dicebot-telegram`.

pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod responder;

pub use errors::{Error, Result};
