//! Admin commands, broadcast accounting and user registration.

mod common;

use common::mock_bot::{drain, BotCall, MockBot};
use common::{build, test_config, text_message, ADMIN_ID};
use hibr_bot::{broadcast_to, BroadcastReport};
use hibr_core::HandlerResponse;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_registration_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);
    let (bot, _rx) = MockBot::with_receiver();
    let (components, chain) = build(&config, bot).await;

    chain.handle(&text_message(5, "نور")).await.unwrap();
    chain.handle(&text_message(5, "قمر")).await.unwrap();
    chain.handle(&text_message(6, "/start")).await.unwrap();

    assert_eq!(components.users.list_users().await.unwrap(), vec![5, 6]);
}

#[tokio::test]
async fn test_anonymous_sender_is_not_recorded() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);
    let (bot, _rx) = MockBot::with_receiver();
    let (components, chain) = build(&config, bot).await;

    chain.handle(&text_message(0, "نور")).await.unwrap();

    assert_eq!(components.users.count_users().await.unwrap(), 0);
}

#[tokio::test]
async fn test_non_admin_is_refused() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);
    let (bot, mut rx) = MockBot::with_receiver();
    let (_components, chain) = build(&config, bot).await;

    for command in ["/stats", "/broadcast hello"] {
        let response = chain.handle(&text_message(5, command)).await.unwrap();
        assert_eq!(response, HandlerResponse::Stop);
    }

    let calls = drain(&mut rx);
    assert_eq!(calls.len(), 2);
    assert!(calls
        .iter()
        .all(|c| matches!(c, BotCall::Text { chat_id: 5, text } if text.contains("للمشرفين"))));
}

#[tokio::test]
async fn test_admins_come_only_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = test_config(&temp_dir);
    config.app.admin_ids = vec![5];
    let (bot, mut rx) = MockBot::with_receiver();
    let (_components, chain) = build(&config, bot).await;

    chain.handle(&text_message(ADMIN_ID, "/stats")).await.unwrap();
    chain.handle(&text_message(5, "/stats")).await.unwrap();

    let calls = drain(&mut rx);
    assert_eq!(calls.len(), 2);
    assert!(matches!(&calls[0], BotCall::Text { chat_id: ADMIN_ID, text } if text.contains("للمشرفين")));
    assert!(matches!(&calls[1], BotCall::Text { chat_id: 5, text } if text.starts_with("👥")));
}

#[tokio::test]
async fn test_stats_counts_users() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);
    let (bot, mut rx) = MockBot::with_receiver();
    let (components, chain) = build(&config, bot).await;

    components.users.record_user(1).await.unwrap();
    components.users.record_user(2).await.unwrap();
    chain.handle(&text_message(ADMIN_ID, "/stats")).await.unwrap();

    let calls = drain(&mut rx);
    assert_eq!(
        calls,
        vec![BotCall::Text {
            chat_id: ADMIN_ID,
            text: "👥 عدد المستخدمين: 3".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_broadcast_counts_failures_and_continues() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);
    let (bot, mut rx) = MockBot::failing_for(&[2]);
    let (components, chain) = build(&config, bot).await;

    for id in [1, 2, 3] {
        components.users.record_user(id).await.unwrap();
    }
    chain
        .handle(&text_message(ADMIN_ID, "/broadcast سلام عليكم"))
        .await
        .unwrap();

    let calls = drain(&mut rx);
    let delivered: Vec<i64> = calls
        .iter()
        .filter_map(|c| match c {
            BotCall::Text { chat_id, text } if text == "سلام عليكم" => Some(*chat_id),
            _ => None,
        })
        .collect();
    assert_eq!(delivered, vec![1, 3, ADMIN_ID]);
    assert_eq!(
        calls.last(),
        Some(&BotCall::Text {
            chat_id: ADMIN_ID,
            text: "📢 تم الإرسال إلى 3 مستخدم، وفشل 1.".to_string(),
        })
    );
}

#[tokio::test]
async fn test_empty_broadcast_gets_usage() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);
    let (bot, mut rx) = MockBot::with_receiver();
    let (_components, chain) = build(&config, bot).await;

    chain
        .handle(&text_message(ADMIN_ID, "/broadcast   "))
        .await
        .unwrap();

    let calls = drain(&mut rx);
    assert_eq!(calls.len(), 1);
    assert!(matches!(&calls[0], BotCall::Text { text, .. } if text.starts_with("الاستخدام")));
}

#[tokio::test]
async fn test_broadcast_to_waits_between_sends() {
    let (bot, _rx) = MockBot::failing_for(&[20]);

    let started = std::time::Instant::now();
    let report = broadcast_to(bot.as_ref(), &[10, 20, 30], "x", Duration::from_millis(20)).await;

    assert_eq!(report, BroadcastReport { sent: 2, failed: 1 });
    assert!(started.elapsed() >= Duration::from_millis(40));
}

#[tokio::test]
async fn test_broadcast_to_nobody() {
    let (bot, mut rx) = MockBot::with_receiver();

    let report = broadcast_to(bot.as_ref(), &[], "x", Duration::ZERO).await;

    assert_eq!(report, BroadcastReport::default());
    assert!(drain(&mut rx).is_empty());
}
