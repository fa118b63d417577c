//! Color palettes for light and dark mode.

use ratatui::style::Color;

/// One complete set of colors. Every widget takes its colors from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,
    pub sidebar_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Chat bubbles ---
    pub user_bubble: Color,
    pub assistant_bubble: Color,

    // --- Float status ---
    pub status_active: Color,
    pub status_inactive: Color,

    // --- Map ---
    pub land: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(249, 250, 251),
    card_bg: Color::Rgb(255, 255, 255),
    sidebar_bg: Color::Rgb(243, 244, 246),
    popup_bg: Color::Rgb(255, 255, 255),
    border_dim: Color::Rgb(209, 213, 219),
    border_active: Color::Rgb(37, 99, 235),
    accent: Color::Rgb(37, 99, 235),
    contrast_fg: Color::Rgb(255, 255, 255),
    text_primary: Color::Rgb(17, 24, 39),
    text_secondary: Color::Rgb(75, 85, 99),
    text_muted: Color::Rgb(156, 163, 175),
    user_bubble: Color::Rgb(37, 99, 235),
    assistant_bubble: Color::Rgb(31, 41, 55),
    status_active: Color::Rgb(22, 163, 74),
    status_inactive: Color::Rgb(220, 38, 38),
    land: Color::Rgb(156, 163, 175),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),
    card_bg: Color::Rgb(31, 41, 55),
    sidebar_bg: Color::Rgb(24, 32, 47),
    popup_bg: Color::Rgb(55, 65, 81),
    border_dim: Color::Rgb(75, 85, 99),
    border_active: Color::Rgb(96, 165, 250),
    accent: Color::Rgb(96, 165, 250),
    contrast_fg: Color::Rgb(17, 24, 39),
    text_primary: Color::Rgb(243, 244, 246),
    text_secondary: Color::Rgb(209, 213, 219),
    text_muted: Color::Rgb(107, 114, 128),
    user_bubble: Color::Rgb(96, 165, 250),
    assistant_bubble: Color::Rgb(229, 231, 235),
    status_active: Color::Rgb(74, 222, 128),
    status_inactive: Color::Rgb(248, 113, 113),
    land: Color::Rgb(75, 85, 99),
};

impl Palette {
    pub fn for_mode(dark_mode: bool) -> &'static Palette {
        if dark_mode {
            &DARK
        } else {
            &LIGHT
        }
    }
}
