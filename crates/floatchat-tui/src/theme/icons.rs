//! Unicode glyphs for the sidebar and status displays.

use floatchat_core::ViewMode;

pub const BRAND: &str = "≋";
pub const ACTIVE_MARKER: &str = "●";
pub const INACTIVE_MARKER: &str = "●";
pub const SELECTED_MARKER: &str = "◉";
pub const SUN: &str = "☀";
pub const MOON: &str = "☾";

pub fn view_icon(view: ViewMode) -> &'static str {
    match view {
        ViewMode::Chat => "✉",
        ViewMode::Map => "⌖",
        ViewMode::Analytics => "▦",
    }
}

/// Glyph for the theme toggle; shows the mode a press switches to
pub fn theme_icon(dark_mode: bool) -> &'static str {
    if dark_mode {
        SUN
    } else {
        MOON
    }
}
