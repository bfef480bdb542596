//! Bot abstraction for sending, editing and answering.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in `hibr-telegram`.

use crate::error::{HibrError, Result};
use crate::types::{Chat, MenuButton, Message};
use async_trait::async_trait;

/// Abstraction for outgoing traffic. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain-text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a message whose text is already HTML markup.
    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
    /// Sends `text` with a one-column button menu and returns the sent message id.
    async fn send_menu(&self, chat: &Chat, text: &str, buttons: &[MenuButton]) -> Result<String>;
    /// Replaces the text of an already-sent message with HTML markup (drops its keyboard).
    async fn edit_html(&self, chat: &Chat, message_id: &str, html: &str) -> Result<()>;
    /// Acknowledges a button press so the client stops its loading indicator.
    async fn answer_callback(&self, query_id: &str) -> Result<()>;
}

/// Parses a message id string into an i32. Used by transports when editing.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| HibrError::Bot(format!("Invalid message_id for edit: {}", s)))
}
