//! Key event handlers per view

use floatchat_core::ViewMode;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert a key press into a message
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_global_key(&key) {
        return Some(msg);
    }

    match state.view {
        ViewMode::Chat => handle_key_chat(key),
        ViewMode::Map => handle_key_map(key),
        ViewMode::Analytics => handle_key_browse(key),
    }
}

/// Bindings that work in every view, including while typing
fn handle_global_key(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') | InputKey::CharCtrl('q') => Some(Message::Quit),
        InputKey::CharCtrl('b') => Some(Message::ToggleSidebar),
        InputKey::CharCtrl('t') => Some(Message::ToggleTheme),
        InputKey::F(1) => Some(Message::SetView(ViewMode::Chat)),
        InputKey::F(2) => Some(Message::SetView(ViewMode::Map)),
        InputKey::F(3) => Some(Message::SetView(ViewMode::Analytics)),
        InputKey::Tab => Some(Message::NextView),
        InputKey::BackTab => Some(Message::PreviousView),
        _ => None,
    }
}

/// Chat view: printable keys go to the input box
fn handle_key_chat(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitInput),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Esc => Some(Message::ClearInput),
        InputKey::CharCtrl('e') => Some(Message::CycleSuggestion),
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Up => Some(Message::ScrollUp),
        InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::End => Some(Message::ScrollToBottom),
        _ => None,
    }
}

/// Map view: float selection plus the shared single-key shortcuts
fn handle_key_map(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextFloat),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPreviousFloat),
        other => handle_key_browse(other),
    }
}

/// Single-key shortcuts for views without text input
fn handle_key_browse(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::Char('1') => Some(Message::SetView(ViewMode::Chat)),
        InputKey::Char('2') => Some(Message::SetView(ViewMode::Map)),
        InputKey::Char('3') => Some(Message::SetView(ViewMode::Analytics)),
        InputKey::Char('s') => Some(Message::ToggleSidebar),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        _ => None,
    }
}
