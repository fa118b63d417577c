//! End-to-end chat flow through the Engine: submit, deferred reply, views

use std::time::Duration;

use floatchat_app::config::Settings;
use floatchat_app::message::Message;
use floatchat_app::{Engine, EngineEvent, InputKey};
use floatchat_core::responder::{FALLBACK_RESPONSE, SALINITY_RESPONSE};
use floatchat_core::{Role, ViewMode};

fn settings(delay_ms: u64, cancel: bool) -> Settings {
    let mut settings = Settings::default();
    settings.chat.reply_delay_ms = delay_ms;
    settings.chat.cancel_superseded_replies = cancel;
    settings
}

/// Wait for the next channel message and process it
async fn pump_one(engine: &mut Engine) {
    let msg = tokio::time::timeout(Duration::from_secs(5), engine.msg_rx.recv())
        .await
        .expect("timed out waiting for a message")
        .expect("message channel closed");
    engine.process_message(msg);
}

fn type_text(engine: &mut Engine, text: &str) {
    for c in text.chars() {
        engine.process_message(Message::Key(InputKey::Char(c)));
    }
}

#[tokio::test]
async fn typed_prompt_gets_salinity_answer() {
    let mut engine = Engine::new(settings(10, false));

    type_text(&mut engine, "Tell me about salinity");
    engine.process_message(Message::Key(InputKey::Enter));

    assert_eq!(engine.state.store.len(), 2);
    assert!(engine.state.input.is_empty());
    assert!(engine.state.is_loading());

    pump_one(&mut engine).await;

    let last = engine.state.store.last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.text, SALINITY_RESPONSE);
    assert!(!engine.state.is_loading());
}

#[tokio::test]
async fn blank_enter_changes_nothing() {
    let mut engine = Engine::new(settings(10, false));
    let mut events = engine.subscribe();

    type_text(&mut engine, "   ");
    engine.process_message(Message::Key(InputKey::Enter));

    assert_eq!(engine.state.store.len(), 1);
    assert!(!engine.state.is_loading());
    assert!(matches!(events.try_recv(), Ok(EngineEvent::InputRejected)));
}

#[tokio::test]
async fn reply_still_lands_after_switching_to_map() {
    let mut engine = Engine::new(settings(10, false));

    engine.process_message(Message::SubmitText("hello".into()));
    engine.process_message(Message::Key(InputKey::F(2)));
    assert_eq!(engine.state.view, ViewMode::Map);

    pump_one(&mut engine).await;

    assert_eq!(engine.state.store.len(), 3);
    assert_eq!(engine.state.store.last().unwrap().text, FALLBACK_RESPONSE);
}

#[tokio::test]
async fn cancelling_drops_reply_after_view_switch() {
    let mut engine = Engine::new(settings(10, true));

    engine.process_message(Message::SubmitText("hello".into()));
    engine.process_message(Message::SetView(ViewMode::Analytics));
    assert!(!engine.state.is_loading());

    pump_one(&mut engine).await;

    assert_eq!(engine.state.store.len(), 2);
    assert_eq!(engine.state.store.last().unwrap().role, Role::User);
}

#[tokio::test]
async fn ids_increase_across_a_conversation() {
    let mut engine = Engine::new(settings(5, false));

    for prompt in ["salinity", "temperature", "float", "anything"] {
        engine.process_message(Message::SubmitText(prompt.into()));
    }
    for _ in 0..4 {
        pump_one(&mut engine).await;
    }

    let ids: Vec<u64> = engine
        .state
        .store
        .snapshot()
        .iter()
        .map(|m| m.id.0)
        .collect();
    assert_eq!(ids.len(), 9);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn input_closed_quits_after_last_reply() {
    let mut engine = Engine::new(settings(10, false));

    engine.process_message(Message::SubmitText("float".into()));
    engine.process_message(Message::InputClosed);
    assert!(!engine.should_quit());

    pump_one(&mut engine).await;

    assert!(engine.should_quit());
    assert_eq!(engine.state.store.len(), 3);
}
