//! Float map: world outline with float markers, legend, region panel and
//! the selected-float popup

use floatchat_core::sample_data::{LAST_UPDATE, MAP_CENTER, MAP_HALF_SPAN, REGION_NAME};
use floatchat_core::{status_counts, FloatRecord, FloatStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution},
        Paragraph, Widget,
    },
};

use crate::theme::{icons, styles, Palette};

/// Width of the legend/region/popup column
const PANEL_WIDTH: u16 = 30;

pub struct MapView<'a> {
    floats: &'a [FloatRecord],
    selected: usize,
    palette: &'a Palette,
}

impl<'a> MapView<'a> {
    pub fn new(floats: &'a [FloatRecord], selected: usize, palette: &'a Palette) -> Self {
        Self {
            floats,
            selected,
            palette,
        }
    }

    fn render_canvas(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let (lat, lon) = MAP_CENTER;
        let (lat_span, lon_span) = MAP_HALF_SPAN;

        let floats = self.floats;
        let selected = self.selected;

        Canvas::default()
            .block(styles::card_block(p, false))
            .background_color(p.background)
            .marker(Marker::Braille)
            .x_bounds([lon - lon_span, lon + lon_span])
            .y_bounds([lat - lat_span, lat + lat_span])
            .paint(move |ctx| {
                ctx.draw(&Map {
                    color: p.land,
                    resolution: MapResolution::High,
                });
                ctx.layer();
                for (idx, float) in floats.iter().enumerate() {
                    let marker = if idx == selected {
                        icons::SELECTED_MARKER
                    } else {
                        status_marker(float.status)
                    };
                    ctx.print(
                        float.lon,
                        float.lat,
                        Span::styled(
                            format!("{} {}", marker, float.id),
                            styles::float_status(p, float.status),
                        ),
                    );
                }
            })
            .render(area, buf);
    }

    fn render_legend(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let (active, inactive) = status_counts(self.floats);
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    icons::ACTIVE_MARKER,
                    styles::float_status(p, FloatStatus::Active),
                ),
                Span::styled(format!(" Active ({})", active), styles::text_primary(p)),
            ]),
            Line::from(vec![
                Span::styled(
                    icons::INACTIVE_MARKER,
                    styles::float_status(p, FloatStatus::Inactive),
                ),
                Span::styled(
                    format!(" Inactive ({})", inactive),
                    styles::text_primary(p),
                ),
            ]),
        ];
        let block = styles::card_block(p, false)
            .title(Line::from(Span::styled(" Active ARGO Floats ", styles::title(p))));
        Paragraph::new(lines).block(block).render(area, buf);
    }

    fn render_region(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let lines = vec![
            Line::styled(format!("Region: {}", REGION_NAME), styles::text_secondary(p)),
            Line::styled(format!("Last Update: {}", LAST_UPDATE), styles::text_secondary(p)),
        ];
        Paragraph::new(lines)
            .block(styles::card_block(p, false))
            .render(area, buf);
    }

    fn render_popup(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let Some(float) = self.floats.get(self.selected) else {
            return;
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Status: ", styles::text_secondary(p)),
                Span::styled(float.status.as_str(), styles::float_status(p, float.status)),
            ]),
            Line::styled(
                format!("Temperature: {}°C", float.temperature),
                styles::text_primary(p),
            ),
            Line::styled(
                format!("Salinity: {} PSU", float.salinity),
                styles::text_primary(p),
            ),
            Line::styled(
                format!("Position: {}", format_position(float.lat, float.lon)),
                styles::text_secondary(p),
            ),
            Line::styled("↑/↓ select float", styles::text_muted(p)),
        ];
        let block = styles::popup_block(p).title(Line::from(Span::styled(
            format!(" Float {} ", float.id),
            styles::title(p),
        )));
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

impl Widget for MapView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let [map_area, panel] =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(PANEL_WIDTH)]).areas(area);
        self.render_canvas(map_area, buf);

        let [legend, region, popup] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(7),
        ])
        .areas(panel);
        self.render_legend(legend, buf);
        self.render_region(region, buf);
        self.render_popup(popup, buf);
    }
}

fn status_marker(status: FloatStatus) -> &'static str {
    match status {
        FloatStatus::Active => icons::ACTIVE_MARKER,
        FloatStatus::Inactive => icons::INACTIVE_MARKER,
    }
}

/// `20.50°N, 65.80°E` style coordinates
pub fn format_position(lat: f64, lon: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.2}°{}, {:.2}°{}", lat.abs(), ns, lon.abs(), ew)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;
    use floatchat_core::sample_data::sample_floats;

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(20.5, 65.8), "20.50°N, 65.80°E");
        assert_eq!(format_position(-3.25, -10.0), "3.25°S, 10.00°W");
    }

    #[test]
    fn test_legend_counts() {
        let floats = sample_floats();
        let mut term = TestTerminal::new();
        term.render_widget(MapView::new(&floats, 0, &LIGHT), term.area());

        assert!(term.buffer_contains("Active ARGO Floats"));
        assert!(term.buffer_contains("Active (2)"));
        assert!(term.buffer_contains("Inactive (1)"));
    }

    #[test]
    fn test_region_panel() {
        let floats = sample_floats();
        let mut term = TestTerminal::new();
        term.render_widget(MapView::new(&floats, 0, &LIGHT), term.area());

        assert!(term.buffer_contains("Region: Indian Ocean"));
        assert!(term.buffer_contains("Last Update: 2 hours ago"));
    }

    #[test]
    fn test_markers_for_every_float() {
        let floats = sample_floats();
        let mut term = TestTerminal::new();
        term.render_widget(MapView::new(&floats, 0, &LIGHT), term.area());

        for id in ["F001", "F002", "F003"] {
            assert!(term.buffer_contains(id), "missing marker {id}");
        }
    }

    #[test]
    fn test_popup_follows_selection() {
        let floats = sample_floats();
        let mut term = TestTerminal::new();
        term.render_widget(MapView::new(&floats, 2, &LIGHT), term.area());

        assert!(term.buffer_contains("Float F003"));
        assert!(term.buffer_contains("Status: inactive"));
        assert!(term.buffer_contains("Temperature: 30.2°C"));
        assert!(term.buffer_contains("Salinity: 35.4 PSU"));
    }
}
