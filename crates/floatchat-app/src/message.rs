//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::reply::ReplyTicket;
use floatchat_core::{ResponseKind, ViewMode};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (loading animation)
    Tick,

    /// Quit immediately (Ctrl+C, signal handler, end of headless input)
    Quit,

    // ─────────────────────────────────────────────────────────
    // View Navigation
    // ─────────────────────────────────────────────────────────
    /// Show a specific view
    SetView(ViewMode),
    /// Show the next view in sidebar order (Tab)
    NextView,
    /// Show the previous view in sidebar order (Shift+Tab)
    PreviousView,

    // ─────────────────────────────────────────────────────────
    // Presentation Shell
    // ─────────────────────────────────────────────────────────
    /// Expand or collapse the sidebar
    ToggleSidebar,
    /// Switch between light and dark palettes
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Chat Input
    // ─────────────────────────────────────────────────────────
    /// Append a character to the input buffer
    InputChar(char),
    /// Delete the last character of the input buffer
    InputBackspace,
    /// Clear the input buffer
    ClearInput,
    /// Fill the input with the next example query
    CycleSuggestion,
    /// Send the input buffer as a prompt
    SubmitInput,
    /// Send text as a prompt without going through the input buffer
    SubmitText(String),
    /// No more prompts will arrive (headless stdin reached EOF)
    InputClosed,

    // ─────────────────────────────────────────────────────────
    // Deferred Replies
    // ─────────────────────────────────────────────────────────
    /// A deferred reply finished its delay
    ReplyReady {
        ticket: ReplyTicket,
        kind: ResponseKind,
    },

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll the transcript up one line
    ScrollUp,
    /// Scroll the transcript down one line
    ScrollDown,
    /// Scroll the transcript up one page
    PageUp,
    /// Scroll the transcript down one page
    PageDown,
    /// Jump back to the newest message
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Map Messages
    // ─────────────────────────────────────────────────────────
    /// Show the popup for the next float
    SelectNextFloat,
    /// Show the popup for the previous float
    SelectPreviousFloat,
}
