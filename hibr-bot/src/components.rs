//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::Result;
use handler_chain::HandlerChain;
use hibr_core::Bot;
use hibr_telegram::{TelegramBotAdapter, TelegramConfig};
use std::sync::Arc;
use storage::{SessionRepository, SqlitePoolManager, UserRepository};
use tracing::{error, info, instrument};

use crate::config::BotConfig;
use crate::handlers::{AdminHandler, DecorateHandler, RegistrationHandler, StartHandler};

/// Core dependencies for run_bot; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub users: UserRepository,
    pub sessions: SessionRepository,
    pub teloxide_bot: teloxide::Bot,
    /// Bot used by handlers; the Telegram adapter unless overridden (e.g. a mock in tests).
    pub handler_bot: Arc<dyn Bot>,
}

/// Opens the database (both tables share one pool) and builds the Telegram bot.
/// When `handler_bot_override` is `Some`, handlers send through it instead of Telegram.
#[instrument(skip(config, handler_bot_override))]
pub async fn build_bot_components(
    config: &BotConfig,
    handler_bot_override: Option<Arc<dyn Bot>>,
) -> Result<BotComponents> {
    let pool = SqlitePoolManager::new(config.database_url())
        .await
        .map_err(|e| {
            error!(
                error = %e,
                database_url = %config.database_url(),
                "Failed to open database"
            );
            anyhow::anyhow!("Failed to open database: {}", e)
        })?;
    let users = UserRepository::with_pool(pool.clone())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize user storage: {}", e))?;
    let sessions = SessionRepository::with_pool(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize session storage: {}", e))?;

    let telegram = TelegramConfig {
        bot_token: config.bot_token().to_string(),
        telegram_api_url: config.telegram_api_url().map(str::to_string),
    };
    let teloxide_bot = telegram.build_bot()?;

    let handler_bot = match handler_bot_override {
        Some(bot) => bot,
        None => Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
    };

    info!(database_url = %config.database_url(), "Bot components ready");
    Ok(BotComponents {
        users,
        sessions,
        teloxide_bot,
        handler_bot,
    })
}

/// Builds the handler chain (registration → start → admin → decorate).
pub fn build_handler_chain(config: &BotConfig, components: &BotComponents) -> Result<HandlerChain> {
    let app = config.app();
    let menu = app
        .style_menu()
        .map_err(|e| anyhow::anyhow!("STYLE_MENU is invalid: {}", e))?;

    Ok(HandlerChain::new()
        .add_handler(Arc::new(RegistrationHandler::new(components.users.clone())))
        .add_handler(Arc::new(StartHandler::new(components.handler_bot.clone())))
        .add_handler(Arc::new(AdminHandler::new(
            components.handler_bot.clone(),
            components.users.clone(),
            app.clone(),
        )))
        .add_handler(Arc::new(DecorateHandler::new(
            components.handler_bot.clone(),
            components.sessions.clone(),
            &menu,
            app.max_input_chars,
            app.session_ttl(),
        ))))
}
