//! Active text for one conversation.
//!
//! Maps to the `sessions` table; each new input overwrites the row for its chat.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SessionRecord {
    pub chat_id: i64,
    pub user_id: i64,
    pub text: String,
    pub updated_at: DateTime<Utc>,
}

impl SessionRecord {
    /// True when the record is older than `ttl` at `now`.
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.updated_at > ttl
    }
}
