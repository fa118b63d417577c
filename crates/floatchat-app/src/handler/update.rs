//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use tracing::info;

use super::{chat, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // View Navigation
        // ─────────────────────────────────────────────────────────
        Message::SetView(view) => chat::handle_view_change(state, view),
        Message::NextView => chat::handle_view_change(state, state.view.next()),
        Message::PreviousView => chat::handle_view_change(state, state.view.previous()),

        // ─────────────────────────────────────────────────────────
        // Presentation Shell
        // ─────────────────────────────────────────────────────────
        Message::ToggleSidebar => {
            state.sidebar_open = !state.sidebar_open;
            UpdateResult::none()
        }

        Message::ToggleTheme => {
            state.dark_mode = !state.dark_mode;
            info!(
                "Switched to {} mode",
                if state.dark_mode { "dark" } else { "light" }
            );
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Chat Input
        // ─────────────────────────────────────────────────────────
        Message::InputChar(c) => {
            state.input.push(c);
            UpdateResult::none()
        }

        Message::InputBackspace => {
            state.input.pop();
            UpdateResult::none()
        }

        Message::ClearInput => {
            state.input.clear();
            UpdateResult::none()
        }

        Message::CycleSuggestion => chat::handle_cycle_suggestion(state),
        Message::SubmitInput => chat::handle_submit_input(state),
        Message::SubmitText(text) => chat::submit_prompt(state, text),
        Message::InputClosed => chat::handle_input_closed(state),

        // ─────────────────────────────────────────────────────────
        // Deferred Replies
        // ─────────────────────────────────────────────────────────
        Message::ReplyReady { ticket, kind } => chat::handle_reply_ready(state, ticket, kind),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.chat_scroll.scroll_up(1);
            UpdateResult::none()
        }

        Message::ScrollDown => {
            state.chat_scroll.scroll_down(1);
            UpdateResult::none()
        }

        Message::PageUp => {
            state.chat_scroll.page_up();
            UpdateResult::none()
        }

        Message::PageDown => {
            state.chat_scroll.page_down();
            UpdateResult::none()
        }

        Message::ScrollToBottom => {
            state.chat_scroll.scroll_to_bottom();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Map Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNextFloat => {
            if !state.floats.is_empty() {
                state.selected_float = (state.selected_float + 1) % state.floats.len();
            }
            UpdateResult::none()
        }

        Message::SelectPreviousFloat => {
            let len = state.floats.len();
            if len > 0 {
                state.selected_float = (state.selected_float + len - 1) % len;
            }
            UpdateResult::none()
        }
    }
}
