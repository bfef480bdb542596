//! Session repository: the text each chat is currently decorating.
//!
//! One row per chat, overwritten by every new input. Rows older than the caller's TTL count as absent
//! and are deleted when read.

use crate::models::SessionRecord;
use crate::sqlite_pool::SqlitePoolManager;
use chrono::{DateTime, Duration, Utc};
use tracing::info;

#[derive(Clone)]
pub struct SessionRepository {
    pool_manager: SqlitePoolManager,
}

impl SessionRepository {
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        Self::with_pool(pool_manager).await
    }

    pub async fn with_pool(pool_manager: SqlitePoolManager) -> Result<Self, sqlx::Error> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating sessions table if not exist");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sessions (
                chat_id INTEGER PRIMARY KEY,
                user_id INTEGER NOT NULL,
                text TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;

        Ok(())
    }

    /// Stores `text` as the active text of `chat_id`, replacing any previous one.
    pub async fn save(&self, chat_id: i64, user_id: i64, text: &str) -> Result<(), sqlx::Error> {
        self.save_at(chat_id, user_id, text, Utc::now()).await
    }

    /// [`Self::save`] with an explicit timestamp.
    pub async fn save_at(
        &self,
        chat_id: i64,
        user_id: i64,
        text: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO sessions (chat_id, user_id, text, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(chat_id) DO UPDATE SET
                user_id = excluded.user_id,
                text = excluded.text,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(chat_id)
        .bind(user_id)
        .bind(text)
        .bind(updated_at)
        .execute(self.pool_manager.pool())
        .await?;

        info!(chat_id = chat_id, user_id = user_id, "Saved session");
        Ok(())
    }

    /// Returns the live session of `chat_id`, or None when it is missing or older than `ttl`.
    pub async fn load(
        &self,
        chat_id: i64,
        ttl: Duration,
    ) -> Result<Option<SessionRecord>, sqlx::Error> {
        let record = sqlx::query_as::<_, SessionRecord>(
            "SELECT chat_id, user_id, text, updated_at FROM sessions WHERE chat_id = ?",
        )
        .bind(chat_id)
        .fetch_optional(self.pool_manager.pool())
        .await?;

        match record {
            Some(r) if r.is_expired(ttl, Utc::now()) => {
                info!(chat_id = chat_id, updated_at = %r.updated_at, "Session expired");
                self.delete(chat_id).await?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    pub async fn delete(&self, chat_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE chat_id = ?")
            .bind(chat_id)
            .execute(self.pool_manager.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deletes every session older than `ttl`. Returns the number of rows removed.
    pub async fn purge_expired(&self, ttl: Duration) -> Result<u64, sqlx::Error> {
        let cutoff = Utc::now() - ttl;

        let result = sqlx::query("DELETE FROM sessions WHERE updated_at < ?")
            .bind(cutoff)
            .execute(self.pool_manager.pool())
            .await?;

        info!(
            "Purged {} sessions older than {} seconds",
            result.rows_affected(),
            ttl.num_seconds()
        );
        Ok(result.rows_affected())
    }
}
