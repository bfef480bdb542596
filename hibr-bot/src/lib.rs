//! # Hibr decoration bot
//!
//! Wires storage, the decoration engine and the handler chain behind Telegram. Loads config from env,
//! runs the dispatcher and, when a port is set, the keep-alive endpoint.

pub mod broadcast;
pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod render;
pub mod runner;

pub use broadcast::{broadcast, broadcast_to, BroadcastReport};
pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{AppConfig, BaseConfig, BotConfig};
pub use handlers::{AdminHandler, DecorateHandler, RegistrationHandler, StartHandler};
pub use runner::run_bot;
