use async_trait::async_trait;
use hibr_core::{Bot, Handler, HandlerResponse, HibrError, Message, Result};
use std::sync::Arc;
use storage::UserRepository;
use tracing::{info, instrument, warn};

use crate::broadcast::broadcast;
use crate::config::AppConfig;
use crate::render;

/// Admin-only commands: `/broadcast <text>` and `/stats`.
pub struct AdminHandler {
    bot: Arc<dyn Bot>,
    users: UserRepository,
    app: AppConfig,
}

impl AdminHandler {
    /// Admins and broadcast pacing come from `app`.
    pub fn new(bot: Arc<dyn Bot>, users: UserRepository, app: AppConfig) -> Self {
        Self { bot, users, app }
    }

    async fn run_broadcast(&self, message: &Message, text: &str) -> Result<()> {
        if text.is_empty() {
            return self.bot.reply_to(message, render::BROADCAST_USAGE).await;
        }
        info!(admin_id = message.user.id, "step: broadcast started");
        let delay = self.app.broadcast_delay();
        let report = broadcast(self.bot.as_ref(), &self.users, text, delay).await?;
        self.bot
            .reply_to(message, &render::broadcast_summary(report.sent, report.failed))
            .await
    }

    async fn send_stats(&self, message: &Message) -> Result<()> {
        let count = self
            .users
            .count_users()
            .await
            .map_err(|e| HibrError::Database(e.to_string()))?;
        self.bot.reply_to(message, &render::stats(count)).await
    }
}

#[async_trait]
impl Handler for AdminHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let (command, args) = match message.command() {
            Some((c @ ("broadcast" | "stats"), args)) => (c, args),
            _ => return Ok(HandlerResponse::Continue),
        };

        if !self.app.is_admin(message.user.id) {
            warn!(user_id = message.user.id, command = %command, "Unauthorized admin command");
            self.bot.reply_to(message, render::NOT_ALLOWED).await?;
            return Ok(HandlerResponse::Stop);
        }

        match command {
            "broadcast" => self.run_broadcast(message, args).await?,
            _ => self.send_stats(message).await?,
        }
        Ok(HandlerResponse::Stop)
    }
}
