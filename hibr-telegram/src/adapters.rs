//! Adapters from Telegram (teloxide) types to hibr_core types.
//! Depends only on teloxide and hibr_core type definitions.

use hibr_core::{CallbackContext, Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn anonymous_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

/// Short Bot API name of the chat kind.
fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    Chat {
        id: chat.id.0,
        chat_type: chat_type(chat).to_string(),
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(anonymous_user),
            chat: core_chat(&self.0.chat),
            content: self.0.text().unwrap_or("").to_string(),
            message_type: "text".to_string(),
            created_at: chrono::Utc::now(),
            callback: None,
        }
    }
}

/// Wraps a teloxide CallbackQuery (inline button press) for conversion to core [`Message`].
///
/// The core message id is the id of the message carrying the keyboard. Presses on inline-mode messages
/// have no such message; they map to the presser's private chat with an empty id.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Message {
        let user = TelegramUserWrapper(&self.0.from).to_core();
        let (id, chat) = match self.0.message.as_ref() {
            Some(m) => (m.id().to_string(), core_chat(m.chat())),
            None => (
                String::new(),
                Chat {
                    id: user.id,
                    chat_type: "private".to_string(),
                },
            ),
        };
        let data = self.0.data.clone().unwrap_or_default();
        Message {
            id,
            user,
            chat,
            content: data.clone(),
            message_type: "callback".to_string(),
            created_at: chrono::Utc::now(),
            callback: Some(CallbackContext {
                query_id: self.0.id.to_string(),
                data,
            }),
        }
    }
}
