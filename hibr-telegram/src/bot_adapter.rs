//! Wraps teloxide::Bot and implements [`hibr_core::Bot`]. Production code talks to Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use hibr_core::{parse_message_id, Bot as CoreBot, Chat, HibrError, MenuButton, Message, Result};
use teloxide::payloads::{EditMessageTextSetters, SendMessageSetters};
use teloxide::prelude::*;
use teloxide::types::{
    CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode,
};

/// Thin wrapper around teloxide::Bot that implements hibr-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// One button per row, in the given order.
pub(crate) fn keyboard(buttons: &[MenuButton]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(buttons.iter().map(|b| {
        vec![InlineKeyboardButton::callback(
            b.label.clone(),
            b.data.clone(),
        )]
    }))
}

fn bot_error(e: teloxide::RequestError) -> HibrError {
    HibrError::Bot(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), html.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_menu(&self, chat: &Chat, text: &str, buttons: &[MenuButton]) -> Result<String> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(keyboard(buttons))
            .await
            .map_err(bot_error)?;
        Ok(sent.id.to_string())
    }

    async fn edit_html(&self, chat: &Chat, message_id: &str, html: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), html.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(CallbackQueryId(query_id.to_string()))
            .await
            .map_err(bot_error)?;
        Ok(())
    }
}
