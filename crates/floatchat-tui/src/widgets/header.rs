//! Header bar with the active view title and subtitle

use floatchat_core::ViewMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct MainHeader<'a> {
    view: ViewMode,
    loading: bool,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(view: ViewMode, palette: &'a Palette) -> Self {
        Self {
            view,
            loading: false,
            palette,
        }
    }

    /// Show a pending-reply marker on the right of the title row
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut title = vec![Span::styled(format!(" {}", self.view.title()), styles::title(p))];
        if self.loading {
            title.push(Span::styled("  · replying", styles::text_muted(p)));
        }

        let lines = vec![
            Line::from(title),
            Line::from(Span::styled(
                format!(" {}", self.view.subtitle()),
                styles::text_secondary(p),
            )),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;

    #[test]
    fn test_header_shows_title_and_subtitle() {
        let mut term = TestTerminal::with_size(60, 4);
        term.render_widget(MainHeader::new(ViewMode::Map, &LIGHT), term.area());

        assert!(term.line_contains(1, "ARGO Float Map"));
        assert!(term.line_contains(2, "Real-time float positions and status"));
    }

    #[test]
    fn test_header_loading_marker() {
        let mut term = TestTerminal::with_size(60, 4);
        term.render_widget(
            MainHeader::new(ViewMode::Chat, &LIGHT).loading(true),
            term.area(),
        );

        assert!(term.buffer_contains("Float-chat"));
        assert!(term.buffer_contains("replying"));
    }
}
