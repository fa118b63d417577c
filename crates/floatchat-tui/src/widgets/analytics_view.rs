//! Analytics dashboard: four cards, the first carrying the depth profile chart

use floatchat_core::{AnalyticsCard, DepthProfile};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct AnalyticsView<'a> {
    cards: &'a [AnalyticsCard],
    profile: &'a DepthProfile,
    palette: &'a Palette,
}

impl<'a> AnalyticsView<'a> {
    pub fn new(cards: &'a [AnalyticsCard], profile: &'a DepthProfile, palette: &'a Palette) -> Self {
        Self {
            cards,
            profile,
            palette,
        }
    }

    fn render_card(&self, index: usize, card: &AnalyticsCard, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, false).title(Line::from(Span::styled(
            format!(" {} ", card.title),
            styles::title(p),
        )));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let stats_height = u16::try_from(card.stats.len()).unwrap_or(u16::MAX);
        let [plot, stats] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(stats_height)]).areas(inner);

        // The temperature card plots the profile; the others show what they would plot
        if index == 0 {
            ProfileChart::new(self.profile, p).render(plot, buf);
        } else {
            let [_, middle, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(plot);
            Paragraph::new(Line::styled(card.caption.clone(), styles::text_muted(p)))
                .alignment(Alignment::Center)
                .render(middle, buf);
        }

        let lines: Vec<Line> = card
            .stats
            .iter()
            .map(|s| Line::styled(format!(" {}", s), styles::text_secondary(p)))
            .collect();
        Paragraph::new(lines).render(stats, buf);
    }
}

impl Widget for AnalyticsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let [top, bottom] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
        let [a, b] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(top);
        let [c, d] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(bottom);

        for (index, (card, cell)) in self.cards.iter().zip([a, b, c, d]).enumerate() {
            self.render_card(index, card, cell, buf);
        }
    }
}

/// Temperature against depth, line with markers, depth increasing downward
pub struct ProfileChart<'a> {
    profile: &'a DepthProfile,
    palette: &'a Palette,
}

impl<'a> ProfileChart<'a> {
    pub fn new(profile: &'a DepthProfile, palette: &'a Palette) -> Self {
        Self { profile, palette }
    }
}

impl Widget for ProfileChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let Some((t_min, t_max)) = self.profile.temperature_range() else {
            return;
        };
        let t_lo = (t_min / 5.0).floor() * 5.0;
        let t_hi = (t_max / 5.0).ceil() * 5.0;
        let max_depth = self.profile.max_depth();

        // Chart y grows upward; plot negated depth so the surface is on top
        let points = chart_points(self.profile);

        let datasets = vec![
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(styles::accent(p))
                .data(&points),
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(styles::title(p))
                .data(&points),
        ];

        let x_axis = Axis::default()
            .style(styles::text_muted(p))
            .bounds([t_lo, t_hi])
            .labels([format!("{}°C", t_lo), format!("{}°C", t_hi)]);
        let y_axis = Axis::default()
            .style(styles::text_muted(p))
            .bounds([-max_depth, 0.0])
            .labels([format!("{}m", max_depth), "0m".to_string()]);

        Chart::new(datasets)
            .x_axis(x_axis)
            .y_axis(y_axis)
            .render(area, buf);
    }
}

/// `(temperature, -depth)` pairs
pub fn chart_points(profile: &DepthProfile) -> Vec<(f64, f64)> {
    profile
        .points()
        .into_iter()
        .map(|(temp, depth)| (temp, -depth))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use floatchat_core::sample_data::{analytics_cards, temperature_profile};

    #[test]
    fn test_chart_points_put_depth_below_surface() {
        let points = chart_points(&temperature_profile());
        assert_eq!(points.first(), Some(&(29.2, 0.0)));
        assert_eq!(points.last(), Some(&(12.4, -1000.0)));
        assert!(points.windows(2).all(|w| w[0].1 > w[1].1));
    }

    #[test]
    fn test_all_cards_render() {
        let cards = analytics_cards();
        let profile = temperature_profile();
        let mut term = TestTerminal::new();
        term.render_widget(AnalyticsView::new(&cards, &profile, &DARK), term.area());

        for title in [
            "Temperature Profile",
            "Salinity Distribution",
            "BGC Parameters",
            "Time Series Analysis",
        ] {
            assert!(term.buffer_contains(title), "missing card {title}");
        }
        assert!(term.buffer_contains("Thermocline depth: ~200m"));
        assert!(term.buffer_contains("Mean: 35.8 PSU"));
        assert!(term.buffer_contains("Trend: +0.02°C/month"));
    }

    #[test]
    fn test_placeholder_captions() {
        let cards = analytics_cards();
        let profile = temperature_profile();
        let mut term = TestTerminal::new();
        term.render_widget(AnalyticsView::new(&cards, &profile, &DARK), term.area());

        assert!(term.buffer_contains("Salinity Spatial Plot"));
        assert!(term.buffer_contains("Temporal Trends"));
    }

    #[test]
    fn test_profile_chart_axis_labels() {
        let profile = temperature_profile();
        let mut term = TestTerminal::with_size(40, 14);
        term.render_widget(ProfileChart::new(&profile, &DARK), term.area());

        assert!(term.buffer_contains("1000m"));
        assert!(term.buffer_contains("0m"));
        assert!(term.buffer_contains("10°C"));
        assert!(term.buffer_contains("30°C"));
    }

    #[test]
    fn test_empty_profile_renders_nothing() {
        let profile = DepthProfile {
            depths_m: vec![],
            temperatures_c: vec![],
        };
        let mut term = TestTerminal::with_size(40, 10);
        term.render_widget(ProfileChart::new(&profile, &DARK), term.area());
        assert!(!term.buffer_contains("°C"));
    }
}
