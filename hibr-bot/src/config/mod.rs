//! Bot configuration: BaseConfig (Telegram + log + DB) + AppConfig (decoration, sessions, admin, keep-alive).

mod app;
mod base;
mod bot_config;


pub use app::AppConfig;
pub use base::BaseConfig;
pub use bot_config::BotConfig;
