//! Integration tests for SessionRepository sharing a pool with UserRepository.
//!
//! Covers overwrite-per-chat, TTL expiry on load, explicit delete and purge.

use chrono::{Duration, Utc};
use storage::{SessionRepository, SqlitePoolManager, UserRepository};
use tempfile::TempDir;

async fn repos(dir: &TempDir) -> (UserRepository, SessionRepository) {
    let database_url = dir.path().join("hibr.db");
    let pool = SqlitePoolManager::new(database_url.to_str().unwrap())
        .await
        .expect("Failed to create pool");
    let users = UserRepository::with_pool(pool.clone()).await.unwrap();
    let sessions = SessionRepository::with_pool(pool).await.unwrap();
    (users, sessions)
}

#[tokio::test]
async fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let (_, sessions) = repos(&dir).await;

    sessions.save(10, 1, "نور").await.unwrap();

    let loaded = sessions
        .load(10, Duration::hours(1))
        .await
        .unwrap()
        .expect("session should be live");
    assert_eq!(loaded.chat_id, 10);
    assert_eq!(loaded.user_id, 1);
    assert_eq!(loaded.text, "نور");
}

#[tokio::test]
async fn test_new_input_overwrites_previous() {
    let dir = TempDir::new().unwrap();
    let (_, sessions) = repos(&dir).await;

    sessions.save(10, 1, "أحمد").await.unwrap();
    sessions.save(10, 2, "علي").await.unwrap();

    let loaded = sessions.load(10, Duration::hours(1)).await.unwrap().unwrap();
    assert_eq!(loaded.text, "علي");
    assert_eq!(loaded.user_id, 2);
}

#[tokio::test]
async fn test_sessions_are_scoped_per_chat() {
    let dir = TempDir::new().unwrap();
    let (_, sessions) = repos(&dir).await;

    sessions.save(10, 1, "first").await.unwrap();
    sessions.save(20, 1, "second").await.unwrap();

    assert_eq!(sessions.load(10, Duration::hours(1)).await.unwrap().unwrap().text, "first");
    assert_eq!(sessions.load(20, Duration::hours(1)).await.unwrap().unwrap().text, "second");
    assert!(sessions.load(30, Duration::hours(1)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_expired_session_is_absent_and_deleted() {
    let dir = TempDir::new().unwrap();
    let (_, sessions) = repos(&dir).await;

    sessions
        .save_at(10, 1, "قديم", Utc::now() - Duration::hours(2))
        .await
        .unwrap();

    assert!(sessions.load(10, Duration::hours(1)).await.unwrap().is_none());
    // Deleted on read: even a generous TTL finds nothing now.
    assert!(sessions.load(10, Duration::days(30)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete() {
    let dir = TempDir::new().unwrap();
    let (_, sessions) = repos(&dir).await;

    sessions.save(10, 1, "x").await.unwrap();
    assert!(sessions.delete(10).await.unwrap());
    assert!(!sessions.delete(10).await.unwrap());
}

#[tokio::test]
async fn test_purge_expired_keeps_live_sessions() {
    let dir = TempDir::new().unwrap();
    let (users, sessions) = repos(&dir).await;

    sessions
        .save_at(1, 1, "old", Utc::now() - Duration::days(3))
        .await
        .unwrap();
    sessions
        .save_at(2, 2, "older", Utc::now() - Duration::days(5))
        .await
        .unwrap();
    sessions.save(3, 3, "fresh").await.unwrap();
    users.record_user(3).await.unwrap();

    let purged = sessions.purge_expired(Duration::days(1)).await.unwrap();
    assert_eq!(purged, 2);
    assert!(sessions.load(3, Duration::days(1)).await.unwrap().is_some());
    assert_eq!(users.count_users().await.unwrap(), 1);
}
