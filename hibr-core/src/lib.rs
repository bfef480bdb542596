//! # hibr-core
//!
//! Core types and traits for the decoration bot: [`Bot`], [`Handler`], message, callback and user types,
//! and tracing initialization. Transport-agnostic; used by hibr-telegram, handler-chain and hibr-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{HibrError, Result};
pub use logger::init_tracing;
pub use types::{
    CallbackContext, Chat, Handler, HandlerResponse, MenuButton, Message, ToCoreMessage,
    ToCoreUser, User,
};
