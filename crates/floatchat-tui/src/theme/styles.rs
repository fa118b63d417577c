//! Semantic style builders.

use floatchat_core::{FloatStatus, Role};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn title(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

/// Highlighted navigation entry
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Chat ---
pub fn bubble(p: &Palette, role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(p.user_bubble),
        Role::Assistant => Style::default().fg(p.assistant_bubble),
    }
}

pub fn bubble_label(p: &Palette, role: Role) -> Style {
    bubble(p, role).add_modifier(Modifier::BOLD)
}

// --- Float status ---
pub fn float_status(p: &Palette, status: FloatStatus) -> Style {
    match status {
        FloatStatus::Active => Style::default().fg(p.status_active),
        FloatStatus::Inactive => Style::default().fg(p.status_inactive),
    }
}

// --- Block builders ---
pub fn card_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
        .style(Style::default().bg(p.card_bg))
}

pub fn popup_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup_bg))
}
