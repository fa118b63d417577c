//! Chat transcript: message bubbles, typing indicator and suggestions

use floatchat_app::ChatScrollState;
use floatchat_core::{ChatMessage, Role};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Palette};

/// Transcript pane. Newest messages sit at the bottom; the scroll state
/// counts lines up from there and receives the rendered line count.
pub struct ChatView<'a> {
    messages: &'a [ChatMessage],
    suggestions: &'a [&'a str],
    loading: bool,
    tick: u64,
    show_timestamps: bool,
    palette: &'a Palette,
}

impl<'a> ChatView<'a> {
    pub fn new(messages: &'a [ChatMessage], palette: &'a Palette) -> Self {
        Self {
            messages,
            suggestions: &[],
            loading: false,
            tick: 0,
            show_timestamps: true,
            palette,
        }
    }

    pub fn suggestions(mut self, suggestions: &'a [&'a str]) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Show the typing indicator, animated by `tick`
    pub fn loading(mut self, loading: bool, tick: u64) -> Self {
        self.loading = loading;
        self.tick = tick;
        self
    }

    pub fn show_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    fn build_lines(&self, width: u16) -> Vec<Line<'static>> {
        let p = self.palette;
        let bubble_width = (width.saturating_mul(4) / 5).clamp(10.min(width), width.max(1));
        let mut lines = Vec::new();

        for message in self.messages {
            let alignment = if message.role.is_user() {
                Alignment::Right
            } else {
                Alignment::Left
            };

            lines.push(
                Line::from(Span::styled(
                    message.role.label(),
                    styles::bubble_label(p, message.role),
                ))
                .alignment(alignment),
            );
            for row in wrap_text(&message.text, bubble_width as usize) {
                lines.push(
                    Line::from(Span::styled(row, styles::bubble(p, message.role)))
                        .alignment(alignment),
                );
            }
            if self.show_timestamps {
                lines.push(
                    Line::from(Span::styled(
                        message.formatted_time(),
                        styles::text_muted(p),
                    ))
                    .alignment(alignment),
                );
            }
            lines.push(Line::default());
        }

        if self.loading {
            let dots = ".".repeat((self.tick % 3 + 1) as usize);
            lines.push(Line::from(vec![
                Span::styled(
                    Role::Assistant.label(),
                    styles::bubble_label(p, Role::Assistant),
                ),
                Span::styled(format!(" is typing{}", dots), styles::text_muted(p)),
            ]));
            lines.push(Line::default());
        }

        if !self.suggestions.is_empty() {
            lines.push(Line::from(Span::styled(
                "Try asking:",
                styles::text_secondary(p),
            )));
            for suggestion in self.suggestions {
                lines.push(Line::from(vec![
                    Span::styled("  › ", styles::accent(p)),
                    Span::styled(suggestion.to_string(), styles::text_primary(p)),
                ]));
            }
            lines.push(Line::from(Span::styled(
                "  Ctrl+E copies a suggestion into the input",
                styles::text_muted(p),
            )));
        }

        lines
    }
}

impl StatefulWidget for ChatView<'_> {
    type State = ChatScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.height == 0 || area.width < 2 {
            return;
        }

        let inner = Rect {
            x: area.x + 1,
            width: area.width - 2,
            ..area
        };
        let lines = self.build_lines(inner.width);
        state.update_content_size(lines.len(), inner.height as usize);
        let top = u16::try_from(state.first_visible_line()).unwrap_or(u16::MAX);

        Paragraph::new(lines)
            .scroll((top, 0))
            .render(inner, buf);
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for ch in word.chars() {
                    let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
                    if current_width + w > width {
                        rows.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += w;
                }
            }
        }

        rows.push(current);
    }

    rows
}
