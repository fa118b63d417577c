//! Engine - shared orchestration state for TUI and headless runners
//!
//! Owns the TEA state, the message channel, the shutdown signal and the
//! event broadcaster.

use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info};

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use floatchat_core::ViewMode;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, Copy)]
struct StateSnapshot {
    view: ViewMode,
    message_count: usize,
    rejected_inputs: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            view: state.view,
            message_count: state.store.len(),
            rejected_inputs: state.rejected_inputs,
        }
    }
}

/// Orchestration engine for Floatchat.
///
/// Encapsulates all shared state between TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Shutdown signaling
/// - Event broadcasting for external consumers
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin reader, reply tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create a new Engine from loaded settings.
    ///
    /// Must be called inside a tokio runtime; spawns the signal handler.
    pub fn new(settings: Settings) -> Self {
        let state = AppState::with_settings(settings);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        signals::spawn_signal_handler(msg_tx.clone());

        let (event_tx, _) = broadcast::channel(256);

        info!(
            "Engine ready (reply delay {}ms, cancel superseded: {})",
            state.settings.chat.reply_delay_ms, state.settings.chat.cancel_superseded_replies
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Emits EngineEvents based on state changes detected by comparing
    /// before/after snapshots.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.shutdown_rx);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Get a clone of the shutdown receiver for background tasks.
    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Initiate shutdown: signal background tasks so pending replies are abandoned.
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        let _ = self.shutdown_tx.send(true);
        info!(
            "Engine shut down with {} messages, {} replies pending",
            self.state.store.len(),
            self.state.pending.len()
        );
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.message_count > pre.message_count {
            for message in self.state.store.since(pre.message_count) {
                self.emit(EngineEvent::MessageAppended {
                    message: message.clone(),
                });
            }
        }

        for _ in pre.rejected_inputs..post.rejected_inputs {
            self.emit(EngineEvent::InputRejected);
        }

        if pre.view != post.view {
            self.emit(EngineEvent::ViewChanged {
                from: pre.view,
                to: post.view,
            });
        }
    }

    fn emit(&self, event: EngineEvent) {
        // No receivers is fine
        if self.event_tx.send(event).is_err() {
            debug!("No engine event subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatchat_core::Role;
    use std::time::Duration;

    fn fast_settings() -> Settings {
        let mut settings = Settings::default();
        settings.chat.reply_delay_ms = 10;
        settings
    }

    #[tokio::test]
    async fn test_engine_starts_with_greeting() {
        let engine = Engine::new(Settings::default());
        assert_eq!(engine.state.store.len(), 1);
        assert!(!engine.should_quit());
    }

    #[tokio::test]
    async fn test_submit_emits_message_appended() {
        let mut engine = Engine::new(fast_settings());
        let mut events = engine.subscribe();

        engine.process_message(Message::SubmitText("Tell me about salinity".into()));

        match events.try_recv().unwrap() {
            EngineEvent::MessageAppended { message } => {
                assert_eq!(message.role, Role::User);
                assert_eq!(message.text, "Tell me about salinity");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blank_submit_emits_rejection() {
        let mut engine = Engine::new(Settings::default());
        let mut events = engine.subscribe();

        engine.process_message(Message::SubmitText("   ".into()));

        assert!(matches!(events.try_recv(), Ok(EngineEvent::InputRejected)));
        assert_eq!(engine.state.store.len(), 1);
    }

    #[tokio::test]
    async fn test_view_change_emits_event() {
        let mut engine = Engine::new(Settings::default());
        let mut events = engine.subscribe();

        engine.process_message(Message::SetView(ViewMode::Analytics));

        assert!(matches!(
            events.try_recv(),
            Ok(EngineEvent::ViewChanged {
                from: ViewMode::Chat,
                to: ViewMode::Analytics
            })
        ));
    }

    #[tokio::test]
    async fn test_reply_round_trip_through_channel() {
        let mut engine = Engine::new(fast_settings());

        engine.process_message(Message::SubmitText("What is the temperature?".into()));
        assert!(engine.state.is_loading());

        let msg = tokio::time::timeout(Duration::from_secs(2), engine.msg_rx.recv())
            .await
            .unwrap()
            .unwrap();
        engine.process_message(msg);

        let last = engine.state.store.last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert!(last.text.starts_with("Temperature profiles"));
        assert!(!engine.state.is_loading());
    }

    #[tokio::test]
    async fn test_shutdown_emits_event() {
        let mut engine = Engine::new(Settings::default());
        let mut events = engine.subscribe();

        engine.shutdown();

        assert!(matches!(events.try_recv(), Ok(EngineEvent::Shutdown)));
        assert!(*engine.shutdown_rx.borrow());
    }
}
