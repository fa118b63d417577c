//! Headless mode runner - main event loop without TUI

use tokio::sync::{broadcast, mpsc};

use floatchat_app::{config::Settings, message::Message, Engine, EngineEvent};
use floatchat_core::prelude::*;

use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("Floatchat starting in HEADLESS mode");

    let mut engine = Engine::new(settings);
    let mut events = engine.subscribe();

    // The greeting is already in the transcript
    for message in engine.state.store.snapshot() {
        HeadlessEvent::message(message).emit();
    }

    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });

    let result = headless_event_loop(&mut engine, &mut events).await;

    engine.shutdown();

    info!("Floatchat headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Result<()> {
    while !engine.should_quit() {
        match engine.msg_rx.recv().await {
            Some(msg) => {
                engine.process_message(msg);
                emit_engine_events(events);
            }
            None => {
                info!("Message channel closed");
                break;
            }
        }
    }

    Ok(())
}

/// Forward everything the engine broadcast since the last call
fn emit_engine_events(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                trace!("Forwarding engine event: {}", event.event_type());
                if let Some(headless) = HeadlessEvent::from_engine_event(&event) {
                    headless.emit();
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                error!("Headless output skipped {} events", n);
            }
            Err(_) => break,
        }
    }
}

/// Read prompts from stdin, one per line, then report end of input
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                if msg_tx.blocking_send(Message::SubmitText(line)).is_err() {
                    return;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin closed");
    let _ = msg_tx.blocking_send(Message::InputClosed);
}
