//! Chat handlers: prompt submission, deferred reply delivery, suggestions

use floatchat_core::sample_data::EXAMPLE_QUERIES;
use floatchat_core::{ResponseKind, Role, ViewMode};
use tracing::{debug, info};

use crate::message::Message;
use crate::reply::ReplyTicket;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Send whatever is in the input buffer.
///
/// Blank input stays in the buffer untouched and nothing is appended.
pub(crate) fn handle_submit_input(state: &mut AppState) -> UpdateResult {
    if state.input.trim().is_empty() {
        state.rejected_inputs += 1;
        debug!("Ignoring blank input");
        return UpdateResult::none();
    }
    let prompt = std::mem::take(&mut state.input);
    submit_prompt(state, prompt)
}

/// Append a user prompt and schedule its deferred reply.
pub(crate) fn submit_prompt(state: &mut AppState, prompt: String) -> UpdateResult {
    if prompt.trim().is_empty() {
        state.rejected_inputs += 1;
        debug!("Ignoring blank prompt");
        return UpdateResult::none();
    }

    if state.settings.chat.cancel_superseded_replies {
        revoke_pending(state, "new prompt");
    }

    let id = state.store.append(Role::User, prompt.clone()).id;
    state.suggestion_cursor = None;
    state.chat_scroll.scroll_to_bottom();

    let ticket = state.pending.issue();
    info!("Prompt {} submitted, reply {} scheduled", id, ticket);

    UpdateResult::action(UpdateAction::ScheduleReply {
        ticket,
        prompt,
        delay: state.settings.chat.reply_delay(),
    })
}

/// Append the assistant answer if its ticket is still live.
pub(crate) fn handle_reply_ready(
    state: &mut AppState,
    ticket: ReplyTicket,
    kind: ResponseKind,
) -> UpdateResult {
    if !state.pending.complete(ticket) {
        debug!("Discarding reply {} (revoked)", ticket);
        return finish_if_drained(state);
    }

    let id = state.store.append(Role::Assistant, kind.text()).id;
    state.chat_scroll.scroll_to_bottom();
    info!("Reply {} delivered as message {} ({})", ticket, id, kind.as_str());

    finish_if_drained(state)
}

pub(crate) fn handle_view_change(state: &mut AppState, view: ViewMode) -> UpdateResult {
    if state.set_view(view) && state.settings.chat.cancel_superseded_replies {
        revoke_pending(state, "view switch");
    }
    UpdateResult::none()
}

/// Copy the next example query into the input.
///
/// Only offered while the transcript holds nothing but the greeting.
pub(crate) fn handle_cycle_suggestion(state: &mut AppState) -> UpdateResult {
    let count = state.suggestions().len();
    if count == 0 {
        return UpdateResult::none();
    }

    let next = match state.suggestion_cursor {
        Some(i) => (i + 1) % count,
        None => 0,
    };
    state.suggestion_cursor = Some(next);
    state.input = EXAMPLE_QUERIES[next].to_string();
    UpdateResult::none()
}

pub(crate) fn handle_input_closed(state: &mut AppState) -> UpdateResult {
    debug!("Input closed with {} replies pending", state.pending.len());
    state.input_closed = true;
    finish_if_drained(state)
}

/// Once input is closed, quit as soon as no replies are outstanding.
fn finish_if_drained(state: &AppState) -> UpdateResult {
    if state.input_closed && state.pending.is_empty() {
        UpdateResult::message(Message::Quit)
    } else {
        UpdateResult::none()
    }
}

fn revoke_pending(state: &mut AppState, reason: &str) {
    let revoked = state.pending.revoke_all();
    if revoked > 0 {
        info!("Revoked {} pending replies ({})", revoked, reason);
    }
}
