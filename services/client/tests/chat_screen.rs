mod common;

use client_lib::adapters::seeds::WELCOME_MESSAGE;
use client_lib::config::Config;
use client_lib::error::ClientError;
use client_lib::screens::ChatScreen;
use common::{config, FailingChat, Harness, Services};
use project_manager_core::domain::{Route, Sender, Severity};
use project_manager_core::ports::PortError;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use uuid::Uuid;

#[tokio::test]
async fn mount_opens_first_session_with_welcome() {
    let h = Harness::new(config());
    let chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();

    assert_eq!(chat.user().email, "ana@example.com");
    let view = chat.snapshot().await;
    assert_eq!(view.sessions.len(), 2);
    assert_eq!(view.active_session_id, Some(view.sessions[0].id));
    assert_eq!(view.messages.len(), 1);
    assert_eq!(view.messages[0].text, WELCOME_MESSAGE);
    assert_eq!(view.messages[0].sender, Sender::Bot);
    assert!(!view.awaiting_reply);
}

#[tokio::test(start_paused = true)]
async fn reply_arrives_after_delay() {
    let h = Harness::new(config());
    let mut chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();

    let sent = chat.send_message("Hello there").await.unwrap().unwrap();
    assert_eq!(sent.sender, Sender::User);

    sleep(Duration::from_millis(999)).await;
    let view = chat.snapshot().await;
    assert_eq!(view.messages.len(), 2);
    assert!(view.awaiting_reply);

    sleep(Duration::from_millis(2)).await;
    let view = chat.snapshot().await;
    assert_eq!(view.messages.len(), 3);
    let reply = &view.messages[2];
    assert_eq!(reply.sender, Sender::Bot);
    assert!(reply.text.contains("Hello there"));
    assert!(!view.awaiting_reply);
}

#[tokio::test]
async fn blank_message_is_ignored() {
    let h = Harness::new(config());
    let mut chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();

    assert!(chat.send_message("   ").await.unwrap().is_none());
    assert!(chat.send_message("").await.unwrap().is_none());

    let view = chat.snapshot().await;
    assert_eq!(view.messages.len(), 1);
    assert!(!chat.has_pending_reply());
    assert!(h.notifier.is_empty());
}

#[tokio::test(start_paused = true)]
async fn second_send_waits_for_the_reply() {
    let h = Harness::new(config());
    let mut chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();

    assert!(chat.send_message("one").await.unwrap().is_some());
    assert!(chat.send_message("two").await.unwrap().is_none());
    chat.settle().await;

    let texts: Vec<_> = chat
        .snapshot()
        .await
        .messages
        .into_iter()
        .map(|m| m.text)
        .collect();
    assert_eq!(texts.len(), 3);
    assert_eq!(texts[1], "one");
    assert!(!texts.iter().any(|t| t == "two"));

    assert!(chat.send_message("two").await.unwrap().is_some());
}

#[tokio::test(start_paused = true)]
async fn disposed_screen_never_receives_the_reply() {
    let h = Harness::new(config());
    let mut chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();
    let session = chat.snapshot().await.active_session_id.unwrap();

    chat.send_message("Are you there?").await.unwrap();
    sleep(Duration::from_millis(500)).await;
    chat.dispose();
    sleep(Duration::from_millis(2000)).await;

    assert!(chat.is_disposed());
    assert!(!chat.has_pending_reply());
    assert!(!chat.snapshot().await.awaiting_reply);
    let messages = chat.messages_of(session).await;
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().all(|m| !m.text.starts_with("SIMULATION")));
    assert!(matches!(
        chat.send_message("again").await,
        Err(ClientError::Cancelled)
    ));
}

#[tokio::test(start_paused = true)]
async fn logout_discards_the_pending_reply() {
    let h = Harness::new(config());
    let mut chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();
    let session = chat.snapshot().await.active_session_id.unwrap();

    chat.send_message("Bye").await.unwrap();
    h.ctx.logout().await.unwrap();
    sleep(Duration::from_millis(2000)).await;

    assert_eq!(chat.messages_of(session).await.len(), 2);
    assert!(chat.is_disposed());
    assert!(!chat.snapshot().await.awaiting_reply);
    assert_eq!(h.navigator.current(), Some(Route::Login));
}

#[tokio::test(start_paused = true)]
async fn logout_during_mount_returns_no_screen() {
    let h = Harness::new(Config {
        simulated_latency: Duration::from_millis(300),
        ..config()
    });

    let ctx = h.ctx.clone();
    let (mounted, logout) = tokio::join!(ChatScreen::mount(h.ctx.clone()), async {
        sleep(Duration::from_millis(100)).await;
        ctx.logout().await
    });

    logout.unwrap();
    assert!(matches!(mounted, Err(ClientError::Cancelled)));
    assert_eq!(h.navigator.current(), Some(Route::Login));
}

#[tokio::test(start_paused = true)]
async fn logout_during_session_load_discards_the_messages() {
    let h = Harness::new(Config {
        simulated_latency: Duration::from_millis(300),
        ..config()
    });
    let chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();
    let second = chat.snapshot().await.sessions[1].id;

    let ctx = h.ctx.clone();
    let (selected, logout) = tokio::join!(chat.select_session(second), async {
        sleep(Duration::from_millis(100)).await;
        ctx.logout().await
    });

    logout.unwrap();
    assert!(matches!(selected, Err(ClientError::Cancelled)));
    assert!(chat.is_disposed());
    assert!(chat.messages_of(second).await.is_empty());

    sleep(Duration::from_millis(1000)).await;
    assert!(chat.messages_of(second).await.is_empty());
    assert!(matches!(
        chat.select_session(second).await,
        Err(ClientError::Cancelled)
    ));
}

#[tokio::test(start_paused = true)]
async fn reply_lands_in_the_session_it_was_sent_from() {
    let h = Harness::new(config());
    let mut chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();
    let origin = chat.snapshot().await.active_session_id.unwrap();

    chat.send_message("Question").await.unwrap();
    let fresh = chat.new_chat().await;
    chat.settle().await;

    let origin_messages = chat.messages_of(origin).await;
    assert_eq!(origin_messages.len(), 3);
    assert_eq!(origin_messages[2].sender, Sender::Bot);
    assert!(chat.messages_of(fresh.id).await.is_empty());
    assert_eq!(chat.snapshot().await.active_session_id, Some(fresh.id));
}

#[tokio::test]
async fn new_chat_is_prepended_and_old_sessions_keep_their_messages() {
    let h = Harness::new(config());
    let chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();
    let first = chat.snapshot().await.active_session_id.unwrap();

    let fresh = chat.new_chat().await;
    let view = chat.snapshot().await;
    assert_eq!(view.sessions.len(), 3);
    assert_eq!(view.sessions[0].id, fresh.id);
    assert_eq!(view.active_session_id, Some(fresh.id));
    assert!(view.messages.is_empty());

    assert!(chat.select_session(first).await.unwrap());
    let view = chat.snapshot().await;
    assert_eq!(view.active_session_id, Some(first));
    assert_eq!(view.messages.len(), 1);
}

#[tokio::test]
async fn selecting_an_older_session_loads_its_messages() {
    let h = Harness::new(config());
    let chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();
    let second = chat.snapshot().await.sessions[1].id;

    assert!(chat.select_session(second).await.unwrap());
    let view = chat.snapshot().await;
    assert_eq!(view.active_session_id, Some(second));
    assert_eq!(view.messages.len(), 1);
    assert_eq!(view.messages[0].session_id, second);
}

#[tokio::test]
async fn selecting_an_unknown_session_changes_nothing() {
    let h = Harness::new(config());
    let chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();
    let before = chat.snapshot().await;

    assert!(!chat.select_session(Uuid::new_v4()).await.unwrap());
    let after = chat.snapshot().await;
    assert_eq!(after.active_session_id, before.active_session_id);
    assert_eq!(after.messages, before.messages);
}

#[tokio::test(start_paused = true)]
async fn preview_is_cut_after_twenty_characters() {
    let h = Harness::new(config());
    let mut chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();
    let session = chat.snapshot().await.active_session_id.unwrap();

    chat.send_message("abcdefghijklmnopqrstuvwxy").await.unwrap();
    chat.settle().await;

    let view = chat.snapshot().await;
    let preview = &view
        .sessions
        .iter()
        .find(|s| s.id == session)
        .unwrap()
        .preview;
    assert_eq!(preview, "abcdefghijklmnopqrst...");
}

#[tokio::test(start_paused = true)]
async fn failed_reply_keeps_the_message_and_notifies() {
    let cfg = config();
    let services = Services {
        chat: Arc::new(FailingChat),
        ..Services::simulated(&cfg)
    };
    let h = Harness::with_services(cfg, services);
    let mut chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();

    chat.send_message("Will this work?").await.unwrap();
    chat.settle().await;

    let view = chat.snapshot().await;
    assert_eq!(view.messages.len(), 1);
    assert_eq!(view.messages[0].text, "Will this work?");
    assert!(!view.awaiting_reply);

    let toast = h.notifier.last().unwrap();
    assert_eq!(toast.title, "Error");
    assert_eq!(toast.severity, Severity::Error);
}

#[tokio::test(start_paused = true)]
async fn simulation_off_sends_without_a_reply() {
    let h = Harness::new(Config {
        chat_simulation: false,
        ..config()
    });
    let mut chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();

    chat.send_message("Anyone?").await.unwrap();
    assert!(!chat.has_pending_reply());
    sleep(Duration::from_millis(5000)).await;

    let view = chat.snapshot().await;
    assert_eq!(view.messages.len(), 2);
    assert!(!view.awaiting_reply);
}

#[tokio::test(start_paused = true)]
async fn first_message_without_sessions_opens_one() {
    let h = Harness::new(Config {
        seed_demo_data: false,
        ..config()
    });
    let mut chat = ChatScreen::mount(h.ctx.clone()).await.unwrap();
    assert!(chat.snapshot().await.sessions.is_empty());

    let sent = chat.send_message("Hi").await.unwrap().unwrap();
    let view = chat.snapshot().await;
    assert_eq!(view.sessions.len(), 1);
    assert_eq!(view.active_session_id, Some(sent.session_id));
    assert_eq!(view.sessions[0].preview, "Hi...");
}

#[tokio::test]
async fn mount_without_user_redirects_to_login() {
    let h = Harness::signed_out(config());
    let result = ChatScreen::mount(h.ctx.clone()).await;

    assert!(matches!(
        result,
        Err(ClientError::Port(PortError::Unauthorized))
    ));
    assert_eq!(h.navigator.current(), Some(Route::Login));
}
