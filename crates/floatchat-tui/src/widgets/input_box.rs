//! Single-line chat input with placeholder and cursor tracking

use floatchat_core::sample_data::INPUT_PLACEHOLDER;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{styles, Palette};

pub struct InputBox<'a> {
    input: &'a str,
    palette: &'a Palette,
}

impl<'a> InputBox<'a> {
    pub fn new(input: &'a str, palette: &'a Palette) -> Self {
        Self { input, palette }
    }

    /// Where the terminal cursor belongs after rendering into `area`
    pub fn cursor_position(&self, area: Rect) -> Position {
        let inner_width = area.width.saturating_sub(2);
        let visible = visible_tail(self.input, inner_width.saturating_sub(1) as usize);
        let offset = u16::try_from(visible.width()).unwrap_or(inner_width);
        Position::new(area.x + 1 + offset.min(inner_width), area.y + 1)
    }
}

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, true)
            .title(Line::from(Span::styled(" Message ", styles::accent(p))))
            .title_bottom(
                Line::from(Span::styled(
                    " Enter send · Ctrl+E suggestion ",
                    styles::text_muted(p),
                ))
                .right_aligned(),
            );
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let line = if self.input.is_empty() {
            Line::from(Span::styled(INPUT_PLACEHOLDER, styles::text_muted(p)))
        } else {
            // Leave one column for the cursor
            let visible = visible_tail(self.input, inner.width.saturating_sub(1) as usize);
            Line::from(Span::styled(visible, styles::text_primary(p)))
        };
        Paragraph::new(line).render(inner, buf);
    }
}

/// Longest suffix of `text` that fits in `width` columns
pub fn visible_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut used = 0;
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &text[idx + ch.len_utf8()..];
        }
        used += w;
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;

    #[test]
    fn test_placeholder_when_empty() {
        let mut term = TestTerminal::with_size(90, 3);
        term.render_widget(InputBox::new("", &LIGHT), term.area());
        assert!(term.buffer_contains("Ask about oceanographic data"));
    }

    #[test]
    fn test_shows_typed_text() {
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(InputBox::new("salinity?", &LIGHT), term.area());
        assert!(term.line_contains(1, "salinity?"));
        assert!(!term.buffer_contains("Ask about"));
    }

    #[test]
    fn test_visible_tail_keeps_end_of_long_input() {
        assert_eq!(visible_tail("abcdef", 3), "def");
        assert_eq!(visible_tail("abc", 10), "abc");
        assert_eq!(visible_tail("20°N", 4), "20°N");
    }

    #[test]
    fn test_cursor_follows_text() {
        let area = Rect::new(0, 10, 40, 3);
        let input = InputBox::new("hello", &LIGHT);
        assert_eq!(input.cursor_position(area), Position::new(6, 11));

        let empty = InputBox::new("", &LIGHT);
        assert_eq!(empty.cursor_position(area), Position::new(1, 11));
    }

    #[test]
    fn test_cursor_clamped_for_long_input() {
        let area = Rect::new(0, 0, 10, 3);
        let long = "x".repeat(50);
        let input = InputBox::new(&long, &LIGHT);
        // inner width 8, one column kept for the cursor
        assert_eq!(input.cursor_position(area), Position::new(8, 1));
    }
}
