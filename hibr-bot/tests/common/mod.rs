#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use hibr_bot::{
    build_bot_components, build_handler_chain, AppConfig, BaseConfig, BotComponents, BotConfig,
};
use hibr_core::{CallbackContext, Chat, Message, User};
use std::sync::Arc;
use tempfile::TempDir;

use mock_bot::MockBot;

pub const ADMIN_ID: i64 = 900;

/// Config pointing at a fresh SQLite file inside `temp_dir`; `ADMIN_ID` is the only admin.
pub fn test_config(temp_dir: &TempDir) -> BotConfig {
    BotConfig {
        base: BaseConfig {
            bot_token: "test_bot_token_12345".to_string(),
            telegram_api_url: None,
            log_file: temp_dir.path().join("test.log").display().to_string(),
            database_url: temp_dir.path().join("test.db").display().to_string(),
        },
        app: AppConfig {
            admin_ids: vec![ADMIN_ID],
            broadcast_delay_ms: 0,
            ..AppConfig::default()
        },
    }
}

/// Builds components and the handler chain with `bot` standing in for Telegram.
pub async fn build(
    config: &BotConfig,
    bot: Arc<MockBot>,
) -> (BotComponents, handler_chain::HandlerChain) {
    let bot: Arc<dyn hibr_core::Bot> = bot;
    let components = build_bot_components(config, Some(bot)).await.unwrap();
    let chain = build_handler_chain(config, &components).unwrap();
    (components, chain)
}

fn user(id: i64) -> User {
    User {
        id,
        username: Some(format!("user{}", id)),
        first_name: Some("Omar".to_string()),
        last_name: None,
    }
}

fn private_chat(id: i64) -> Chat {
    Chat {
        id,
        chat_type: "private".to_string(),
    }
}

pub fn text_message(user_id: i64, text: &str) -> Message {
    Message {
        id: "100".to_string(),
        user: user(user_id),
        chat: private_chat(user_id),
        content: text.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
        callback: None,
    }
}

/// A press on a button of the menu message `menu_id`.
pub fn button_press(user_id: i64, menu_id: &str, data: &str) -> Message {
    Message {
        id: menu_id.to_string(),
        user: user(user_id),
        chat: private_chat(user_id),
        content: data.to_string(),
        message_type: "callback".to_string(),
        created_at: Utc::now(),
        callback: Some(CallbackContext {
            query_id: format!("q-{}", data),
            data: data.to_string(),
        }),
    }
}
