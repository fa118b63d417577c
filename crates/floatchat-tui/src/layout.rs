//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width when expanded (labels shown)
pub const SIDEBAR_OPEN_WIDTH: u16 = 20;

/// Sidebar width when collapsed (icons only)
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 5;

/// Header height: border + title + subtitle + border
pub const HEADER_HEIGHT: u16 = 4;

/// Chat input height: border + text + border
pub const INPUT_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub sidebar: Rect,
    pub header: Rect,
    /// Active view body
    pub content: Rect,
}

/// Areas inside the chat view
#[derive(Debug, Clone, Copy)]
pub struct ChatAreas {
    pub transcript: Rect,
    pub input: Rect,
}

pub fn sidebar_width(sidebar_open: bool) -> u16 {
    if sidebar_open {
        SIDEBAR_OPEN_WIDTH
    } else {
        SIDEBAR_COLLAPSED_WIDTH
    }
}

/// Split the screen into sidebar, header and content
pub fn create(area: Rect, sidebar_open: bool) -> ScreenAreas {
    let [sidebar, main] = Layout::horizontal([
        Constraint::Length(sidebar_width(sidebar_open)),
        Constraint::Min(10),
    ])
    .areas(area);

    let [header, content] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).areas(main);

    ScreenAreas {
        sidebar,
        header,
        content,
    }
}

/// Split the chat view into transcript and input box
pub fn create_chat(area: Rect) -> ChatAreas {
    let [transcript, input] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(INPUT_HEIGHT)]).areas(area);
    ChatAreas { transcript, input }
}
