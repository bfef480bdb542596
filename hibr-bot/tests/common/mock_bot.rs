//! Mock implementation of [`hibr_core::Bot`] for integration tests.
//!
//! Records every outgoing call so tests can assert on what the user would see without hitting Telegram.

use async_trait::async_trait;
use hibr_core::{Bot, Chat, HibrError, MenuButton, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;

/// One recorded outgoing call.
#[derive(Debug, Clone, PartialEq)]
pub enum BotCall {
    Text { chat_id: i64, text: String },
    Html { chat_id: i64, html: String },
    Menu { chat_id: i64, text: String, buttons: Vec<MenuButton> },
    Edit { chat_id: i64, message_id: String, html: String },
    Answer { query_id: String },
}

/// Mock Bot that records calls and returns a fixed menu message id.
pub struct MockBot {
    /// Fixed id returned by `send_menu`.
    menu_id: String,
    /// Chats whose `send_message` fails, e.g. users that blocked the bot.
    failing_chats: HashSet<i64>,
    tx: mpsc::UnboundedSender<BotCall>,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for call records. Menu id is `"1"`.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<BotCall>) {
        Self::failing_for(&[])
    }

    /// Like [`Self::with_receiver`], but `send_message` to any of `chats` returns an error.
    pub fn failing_for(chats: &[i64]) -> (Arc<Self>, mpsc::UnboundedReceiver<BotCall>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let bot = Arc::new(Self {
            menu_id: "1".to_string(),
            failing_chats: chats.iter().copied().collect(),
            tx,
        });
        (bot, rx)
    }
}

/// Collects every call recorded so far.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<BotCall>) -> Vec<BotCall> {
    let mut calls = Vec::new();
    while let Ok(call) = rx.try_recv() {
        calls.push(call);
    }
    calls
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        if self.failing_chats.contains(&chat.id) {
            return Err(HibrError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }
        let _ = self.tx.send(BotCall::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()> {
        let _ = self.tx.send(BotCall::Html {
            chat_id: chat.id,
            html: html.to_string(),
        });
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, buttons: &[MenuButton]) -> Result<String> {
        let _ = self.tx.send(BotCall::Menu {
            chat_id: chat.id,
            text: text.to_string(),
            buttons: buttons.to_vec(),
        });
        Ok(self.menu_id.clone())
    }

    async fn edit_html(&self, chat: &Chat, message_id: &str, html: &str) -> Result<()> {
        let _ = self.tx.send(BotCall::Edit {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str) -> Result<()> {
        let _ = self.tx.send(BotCall::Answer {
            query_id: query_id.to_string(),
        });
        Ok(())
    }
}
