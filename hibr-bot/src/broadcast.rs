//! Admin broadcast: one message to every recorded user id, sent sequentially.

use hibr_core::{Bot, Chat, HibrError, Result};
use std::time::Duration;
use storage::UserRepository;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub sent: usize,
    pub failed: usize,
}

/// Sends `text` to every id in `user_ids`, pausing `delay` between sends.
/// A failed send is counted and logged; the run continues with the next id.
#[instrument(skip(bot, user_ids, text), fields(recipients = user_ids.len()))]
pub async fn broadcast_to(
    bot: &dyn Bot,
    user_ids: &[i64],
    text: &str,
    delay: Duration,
) -> BroadcastReport {
    let mut report = BroadcastReport::default();
    for (i, &user_id) in user_ids.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let chat = Chat {
            id: user_id,
            chat_type: "private".to_string(),
        };
        match bot.send_message(&chat, text).await {
            Ok(()) => report.sent += 1,
            Err(e) => {
                warn!(user_id = user_id, error = %e, "Broadcast send failed");
                report.failed += 1;
            }
        }
    }
    info!(sent = report.sent, failed = report.failed, "step: broadcast finished");
    report
}

/// Loads all recorded user ids and broadcasts `text` to them.
pub async fn broadcast(
    bot: &dyn Bot,
    users: &UserRepository,
    text: &str,
    delay: Duration,
) -> Result<BroadcastReport> {
    let user_ids = users
        .list_users()
        .await
        .map_err(|e| HibrError::Database(e.to_string()))?;
    Ok(broadcast_to(bot, &user_ids, text, delay).await)
}
