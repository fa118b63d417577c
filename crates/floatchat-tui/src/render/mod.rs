//! Main render/view function (View in TEA pattern)


use floatchat_app::state::AppState;
use floatchat_core::ViewMode;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::Palette;

/// Render the complete UI (View function in TEA)
///
/// Only the transcript scroll state is written back (rendered line count).
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let palette = Palette::for_mode(state.dark_mode);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let areas = layout::create(area, state.sidebar_open);

    frame.render_widget(
        widgets::Sidebar::new(state.view, state.sidebar_open, state.dark_mode, palette),
        areas.sidebar,
    );
    frame.render_widget(
        widgets::MainHeader::new(state.view, palette).loading(state.is_loading()),
        areas.header,
    );

    match state.view {
        ViewMode::Chat => render_chat(frame, state, areas.content, palette),
        ViewMode::Map => frame.render_widget(
            widgets::MapView::new(&state.floats, state.selected_float, palette),
            areas.content,
        ),
        ViewMode::Analytics => frame.render_widget(
            widgets::AnalyticsView::new(&state.cards, &state.profile, palette),
            areas.content,
        ),
    }
}

fn render_chat(
    frame: &mut Frame,
    state: &mut AppState,
    area: ratatui::layout::Rect,
    palette: &Palette,
) {
    let chat = layout::create_chat(area);

    let transcript = widgets::ChatView::new(state.store.snapshot(), palette)
        .suggestions(state.suggestions())
        .loading(state.is_loading(), state.tick_count)
        .show_timestamps(state.settings.ui.show_timestamps);
    frame.render_stateful_widget(transcript, chat.transcript, &mut state.chat_scroll);

    let input = widgets::InputBox::new(&state.input, palette);
    frame.set_cursor_position(input.cursor_position(chat.input));
    frame.render_widget(input, chat.input);
}
