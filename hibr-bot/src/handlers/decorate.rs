//! Text → style menu → decorated result.
//!
//! A plain text message is checked against the length cap, normalized and stored as the chat's session,
//! then answered with the style menu. A button press loads that session, applies the chosen style and
//! edits the menu message into the result.

use async_trait::async_trait;
use decoration::{apply_named, check_length, normalize, InputError, StyleId};
use hibr_core::{
    Bot, CallbackContext, Handler, HandlerResponse, HibrError, MenuButton, Message, Result,
};
use std::sync::Arc;
use storage::SessionRepository;
use teloxide::utils::html;
use tracing::{error, info, instrument, warn};

use crate::render;

pub struct DecorateHandler {
    bot: Arc<dyn Bot>,
    sessions: SessionRepository,
    menu: Vec<MenuButton>,
    max_input_chars: usize,
    session_ttl: chrono::Duration,
}

impl DecorateHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        sessions: SessionRepository,
        menu: &[StyleId],
        max_input_chars: usize,
        session_ttl: chrono::Duration,
    ) -> Self {
        Self {
            bot,
            sessions,
            menu: menu
                .iter()
                .map(|s| MenuButton::new(s.label(), s.id()))
                .collect(),
            max_input_chars,
            session_ttl,
        }
    }

    async fn on_text(&self, message: &Message) -> Result<HandlerResponse> {
        let user_id = message.user.id;

        if let Err(e) = check_length(&message.content, self.max_input_chars) {
            info!(user_id = user_id, reason = %e, "step: input rejected");
            self.bot
                .reply_to(message, &render::input_rejected(&e))
                .await?;
            return Ok(HandlerResponse::Stop);
        }

        let text = normalize(&message.content);
        if text.is_empty() {
            info!(user_id = user_id, "step: input was only diacritics");
            self.bot
                .reply_to(message, &render::input_rejected(&InputError::Empty))
                .await?;
            return Ok(HandlerResponse::Stop);
        }

        self.sessions
            .save(message.chat.id, user_id, text.as_str())
            .await
            .map_err(|e| {
                error!(error = %e, chat_id = message.chat.id, "Failed to save session");
                HibrError::Database(e.to_string())
            })?;

        let menu_id = self
            .bot
            .send_menu(&message.chat, render::MENU_PROMPT, &self.menu)
            .await?;
        info!(
            user_id = user_id,
            chars = text.char_count(),
            menu_message_id = %menu_id,
            "step: style menu sent"
        );
        Ok(HandlerResponse::Stop)
    }

    async fn on_style_chosen(
        &self,
        message: &Message,
        callback: &CallbackContext,
    ) -> Result<HandlerResponse> {
        if let Err(e) = self.bot.answer_callback(&callback.query_id).await {
            warn!(error = %e, query_id = %callback.query_id, "Failed to answer callback");
        }
        if message.id.is_empty() {
            warn!(user_id = message.user.id, "Button press without a message, ignored");
            return Ok(HandlerResponse::Stop);
        }

        let session = self
            .sessions
            .load(message.chat.id, self.session_ttl)
            .await
            .map_err(|e| HibrError::Database(e.to_string()))?;

        let Some(session) = session else {
            info!(chat_id = message.chat.id, "step: no live session");
            self.bot
                .edit_html(&message.chat, &message.id, &html::escape(render::SESSION_EXPIRED))
                .await?;
            return Ok(HandlerResponse::Stop);
        };

        let text = normalize(&session.text);
        let decorated = {
            let mut rng = rand::thread_rng();
            apply_named(&text, &callback.data, &mut rng)
        };
        self.bot
            .edit_html(&message.chat, &message.id, &render::decorated_html(&decorated))
            .await?;
        info!(
            user_id = message.user.id,
            style = %callback.data,
            "step: decorated text delivered"
        );
        Ok(HandlerResponse::Reply(decorated.into_string()))
    }
}

#[async_trait]
impl Handler for DecorateHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if let Some(callback) = &message.callback {
            return self.on_style_chosen(message, callback).await;
        }
        if message.command().is_some() {
            return Ok(HandlerResponse::Continue);
        }
        self.on_text(message).await
    }
}
