use async_trait::async_trait;
use hibr_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::render;

/// Answers /start and /help with the greeting.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match message.command() {
            Some(("start", _)) | Some(("help", _)) => {
                info!(user_id = message.user.id, "step: sending welcome");
                let html = render::welcome_html(message.user.first_name.as_deref());
                self.bot.send_html(&message.chat, &html).await?;
                Ok(HandlerResponse::Stop)
            }
            _ => Ok(HandlerResponse::Continue),
        }
    }
}
