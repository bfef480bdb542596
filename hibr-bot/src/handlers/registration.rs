use async_trait::async_trait;
use hibr_core::{Handler, Message, Result};
use storage::UserRepository;
use tracing::{error, info, instrument};

/// Records every sender id in before(). Never stops the chain.
pub struct RegistrationHandler {
    users: UserRepository,
}

impl RegistrationHandler {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }
}

#[async_trait]
impl Handler for RegistrationHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let user_id = message.user.id;
        if user_id == 0 {
            return Ok(true);
        }
        match self.users.record_user(user_id).await {
            Ok(true) => info!(user_id = user_id, "step: new user recorded"),
            Ok(false) => {}
            Err(e) => error!(error = %e, user_id = user_id, "Failed to record user"),
        }
        Ok(true)
    }
}
