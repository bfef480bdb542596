//! # hibr-telegram
//!
//! Telegram layer: adapters, [`hibr_core::Bot`] implementation with HTML and inline keyboards, connection
//! config, and the dispatcher that feeds messages and button presses to the handler chain.
//! No storage or decoration logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::run_dispatcher;
