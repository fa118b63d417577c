//! Navigation sidebar with view entries and the theme toggle

use floatchat_core::ViewMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::theme::{icons, styles, Palette};

/// Sidebar. Collapsed it shows icons only; open it adds labels.
pub struct Sidebar<'a> {
    active: ViewMode,
    open: bool,
    dark_mode: bool,
    palette: &'a Palette,
}

impl<'a> Sidebar<'a> {
    pub fn new(active: ViewMode, open: bool, dark_mode: bool, palette: &'a Palette) -> Self {
        Self {
            active,
            open,
            dark_mode,
            palette,
        }
    }

    fn entry(&self, icon: &str, label: &str) -> String {
        if self.open {
            format!(" {} {}", icon, label)
        } else {
            format!(" {}", icon)
        }
    }

    /// Label for the theme toggle names the mode it switches to
    fn theme_label(&self) -> &'static str {
        if self.dark_mode {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Block::default()
            .style(Style::default().bg(p.sidebar_bg))
            .render(area, buf);

        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut lines = Vec::with_capacity(8);

        let brand = if self.open {
            Line::from(vec![
                Span::styled(format!(" {} ", icons::BRAND), styles::accent(p)),
                Span::styled("Floatchat", styles::title(p)),
            ])
        } else {
            Line::from(Span::styled(format!(" {}", icons::BRAND), styles::accent(p)))
        };
        lines.push(brand);
        lines.push(Line::default());

        for view in ViewMode::ALL {
            let text = self.entry(icons::view_icon(view), view.nav_label());
            let style = if view == self.active {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            // Pad the active entry so the highlight spans the full width
            let padded = format!("{:<width$}", text, width = area.width as usize);
            lines.push(Line::styled(padded, style));
        }

        Paragraph::new(lines).render(area, buf);

        // Theme toggle pinned near the bottom
        if area.height >= 7 {
            let toggle_area = Rect {
                x: area.x,
                y: area.y + area.height - 2,
                width: area.width,
                height: 1,
            };
            let toggle = self.entry(icons::theme_icon(self.dark_mode), self.theme_label());
            Paragraph::new(Line::styled(toggle, styles::text_secondary(p))).render(toggle_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_open_sidebar_shows_labels() {
        let mut term = TestTerminal::with_size(20, 12);
        let sidebar = Sidebar::new(ViewMode::Chat, true, false, &LIGHT);
        term.render_widget(sidebar, term.area());

        assert!(term.buffer_contains("Floatchat"));
        assert!(term.buffer_contains("Chat"));
        assert!(term.buffer_contains("Map View"));
        assert!(term.buffer_contains("Analytics"));
        assert!(term.buffer_contains("Dark Mode"));
    }

    #[test]
    fn test_collapsed_sidebar_hides_labels() {
        let mut term = TestTerminal::with_size(5, 12);
        let sidebar = Sidebar::new(ViewMode::Map, false, false, &LIGHT);
        term.render_widget(sidebar, term.area());

        assert!(!term.buffer_contains("Map View"));
        assert!(term.buffer_contains(icons::view_icon(ViewMode::Map)));
    }

    #[test]
    fn test_theme_toggle_label_in_dark_mode() {
        let mut term = TestTerminal::with_size(20, 12);
        let sidebar = Sidebar::new(ViewMode::Chat, true, true, &DARK);
        term.render_widget(sidebar, term.area());

        assert!(term.buffer_contains("Light Mode"));
        assert!(!term.buffer_contains("Dark Mode"));
    }
}
