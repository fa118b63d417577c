//! Transcript scroll state
//!
//! The offset counts lines up from the newest line, so new messages stay in
//! view while the offset is 0. Line and viewport counts are written back by
//! the renderer; until the first render both are 0 and scrolling is a no-op.

/// Scroll position of the chat transcript
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatScrollState {
    /// Lines scrolled up from the bottom
    pub offset: usize,
    /// Total rendered transcript lines
    pub total_lines: usize,
    /// Lines that fit in the viewport
    pub visible_lines: usize,
}

impl ChatScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest offset that still fills the viewport
    pub fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll towards older messages by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    /// Scroll towards newer messages by n lines
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_size());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_size());
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = 0;
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset == 0
    }

    /// Update with new content size, clamping the offset if content shrank
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Index of the first line shown in the viewport
    pub fn first_visible_line(&self) -> usize {
        self.max_offset().saturating_sub(self.offset)
    }

    /// Keep two lines of context between pages
    fn page_size(&self) -> usize {
        self.visible_lines.saturating_sub(2).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(total: usize, visible: usize) -> ChatScrollState {
        let mut state = ChatScrollState::new();
        state.update_content_size(total, visible);
        state
    }

    #[test]
    fn test_scroll_up_clamps_at_top() {
        let mut state = sized(30, 10);
        state.scroll_up(100);
        assert_eq!(state.offset, 20);
        assert_eq!(state.first_visible_line(), 0);
    }

    #[test]
    fn test_scroll_down_saturates_at_bottom() {
        let mut state = sized(30, 10);
        state.scroll_up(3);
        state.scroll_down(10);
        assert!(state.is_at_bottom());
        assert_eq!(state.first_visible_line(), 20);
    }

    #[test]
    fn test_no_scroll_before_first_render() {
        let mut state = ChatScrollState::new();
        state.scroll_up(5);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_content_fits_viewport() {
        let mut state = sized(5, 10);
        state.scroll_up(1);
        assert_eq!(state.offset, 0);
        assert_eq!(state.first_visible_line(), 0);
    }

    #[test]
    fn test_page_moves_by_viewport_minus_context() {
        let mut state = sized(100, 12);
        state.page_up();
        assert_eq!(state.offset, 10);
        state.page_up();
        assert_eq!(state.offset, 20);
        state.page_down();
        assert_eq!(state.offset, 10);
    }

    #[test]
    fn test_page_in_tiny_viewport_moves_one_line() {
        let mut state = sized(10, 2);
        state.page_up();
        assert_eq!(state.offset, 1);
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut state = sized(50, 10);
        state.scroll_up(40);
        state.update_content_size(20, 10);
        assert_eq!(state.offset, 10);
    }

    #[test]
    fn test_taller_viewport_clamps_offset() {
        let mut state = sized(50, 10);
        state.scroll_up(40);
        state.update_content_size(50, 30);
        assert_eq!(state.offset, 20);
    }
}
