//! Action handlers: UpdateAction dispatch and background task spawning

use std::time::Duration;

use floatchat_core::ResponseKind;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::message::Message;
use crate::reply::ReplyTicket;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    shutdown_rx: watch::Receiver<bool>,
) {
    match action {
        UpdateAction::ScheduleReply {
            ticket,
            prompt,
            delay,
        } => {
            spawn_deferred_reply(ticket, prompt, delay, msg_tx, shutdown_rx);
        }
    }
}

/// Answer `prompt` once `delay` has elapsed.
///
/// The canned response is chosen when the timer fires, not when the prompt
/// is submitted. Shutdown abandons the reply.
pub fn spawn_deferred_reply(
    ticket: ReplyTicket,
    prompt: String,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = shutdown_rx.changed() => {
                debug!("Reply {} abandoned on shutdown", ticket);
                return;
            }
        }

        let kind = ResponseKind::classify(&prompt);
        if msg_tx
            .send(Message::ReplyReady { ticket, kind })
            .await
            .is_err()
        {
            warn!("Reply {} dropped: message channel closed", ticket);
        }
    });
}
