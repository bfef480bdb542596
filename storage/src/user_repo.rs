//! User repository: the set of user ids that have talked to the bot.
//!
//! Backs broadcast (full scan) and statistics (count). Inserts are idempotent.

use crate::sqlite_pool::SqlitePoolManager;
use chrono::Utc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct UserRepository {
    pool_manager: SqlitePoolManager,
}

impl UserRepository {
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        Self::with_pool(pool_manager).await
    }

    /// Builds the repository on an existing pool (shared with [`crate::SessionRepository`]).
    pub async fn with_pool(pool_manager: SqlitePoolManager) -> Result<Self, sqlx::Error> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating users table if not exist");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                user_id INTEGER PRIMARY KEY,
                first_seen TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;

        Ok(())
    }

    /// Records `user_id` if absent. Returns true when the id was new.
    pub async fn record_user(&self, user_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("INSERT OR IGNORE INTO users (user_id, first_seen) VALUES (?, ?)")
            .bind(user_id)
            .bind(Utc::now())
            .execute(self.pool_manager.pool())
            .await?;

        let inserted = result.rows_affected() == 1;
        if inserted {
            info!(user_id = user_id, "Recorded new user");
        } else {
            debug!(user_id = user_id, "User already recorded");
        }
        Ok(inserted)
    }

    /// All recorded ids in ascending order.
    pub async fn list_users(&self) -> Result<Vec<i64>, sqlx::Error> {
        let rows: Vec<(i64,)> = sqlx::query_as("SELECT user_id FROM users ORDER BY user_id")
            .fetch_all(self.pool_manager.pool())
            .await?;

        info!("Retrieved {} user ids", rows.len());
        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    pub async fn count_users(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count.0)
    }
}
