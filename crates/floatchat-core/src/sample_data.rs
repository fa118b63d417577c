//! Static sample data shown by the map and analytics views

use crate::types::{AnalyticsCard, DepthProfile, FloatRecord, FloatStatus};

/// First assistant message of every session
pub const GREETING: &str = "Hello! I'm Floatchat, your AI assistant for exploring ARGO oceanographic data. You can ask me about temperature profiles, salinity data, BGC parameters, or any ocean-related queries. How can I help you today?";

/// Prompts offered as suggestions on an empty transcript
pub static EXAMPLE_QUERIES: [&str; 4] = [
    "Show me salinity profiles near the equator in March 2023",
    "Compare BGC parameters in the Arabian Sea for the last 6 months",
    "What are the nearest ARGO floats to coordinates 20°N, 65°E?",
    "Display temperature anomalies in the Indian Ocean",
];

/// How many example queries are offered as suggestions
pub const SUGGESTION_COUNT: usize = 2;

/// Placeholder text for the chat input
pub const INPUT_PLACEHOLDER: &str =
    "Ask about oceanographic data, ARGO floats, or any ocean-related query...";

pub const REGION_NAME: &str = "Indian Ocean";
pub const LAST_UPDATE: &str = "2 hours ago";

/// Map viewport centre as `(lat, lon)`
pub const MAP_CENTER: (f64, f64) = (20.0, 67.0);

/// Half-extent of the map viewport in degrees, as `(lat, lon)`
pub const MAP_HALF_SPAN: (f64, f64) = (15.0, 20.0);

fn float(
    id: &str,
    lat: f64,
    lon: f64,
    temperature: f64,
    salinity: f64,
    status: FloatStatus,
) -> FloatRecord {
    FloatRecord {
        id: id.to_string(),
        lat,
        lon,
        temperature,
        salinity,
        status,
    }
}

/// The three demo floats in the Arabian Sea
pub fn sample_floats() -> Vec<FloatRecord> {
    vec![
        float("F001", 20.5, 65.8, 28.5, 36.2, FloatStatus::Active),
        float("F002", 15.2, 68.9, 29.1, 35.8, FloatStatus::Active),
        float("F003", 12.8, 72.1, 30.2, 35.4, FloatStatus::Inactive),
    ]
}

/// Synthetic temperature-vs-depth cast with a thermocline near 200 m
pub fn temperature_profile() -> DepthProfile {
    DepthProfile {
        depths_m: vec![0.0, 50.0, 100.0, 150.0, 200.0, 300.0, 500.0, 750.0, 1000.0],
        temperatures_c: vec![29.2, 28.8, 27.5, 24.1, 19.6, 16.8, 14.5, 13.2, 12.4],
    }
}

fn card(title: &str, caption: &str, stats: &[&str]) -> AnalyticsCard {
    AnalyticsCard {
        title: title.to_string(),
        caption: caption.to_string(),
        stats: stats.iter().map(|s| s.to_string()).collect(),
    }
}

/// The four dashboard panels, in display order
pub fn analytics_cards() -> Vec<AnalyticsCard> {
    vec![
        card(
            "Temperature Profile",
            "Temperature vs Depth Chart",
            &["Surface: 29.2°C", "1000m: 12.4°C", "Thermocline depth: ~200m"],
        ),
        card(
            "Salinity Distribution",
            "Salinity Spatial Plot",
            &["Mean: 35.8 PSU", "Range: 35.1 - 36.4 PSU", "Std Dev: 0.3 PSU"],
        ),
        card(
            "BGC Parameters",
            "Chlorophyll & Oxygen Trends",
            &["Chl-a: 0.8 mg/m³", "DO: 4.2 ml/L", "pH: 8.1"],
        ),
        card(
            "Time Series Analysis",
            "Temporal Trends",
            &["Period: Jan 2023 - Present", "Data Points: 2,847", "Trend: +0.02°C/month"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::status_counts;

    #[test]
    fn test_sample_floats_match_reference_set() {
        let floats = sample_floats();
        assert_eq!(floats.len(), 3);
        assert_eq!(floats[0].id, "F001");
        assert_eq!(floats[2].status, FloatStatus::Inactive);
        assert_eq!(status_counts(&floats), (2, 1));
    }

    #[test]
    fn test_sample_floats_inside_map_viewport() {
        let (lat_c, lon_c) = MAP_CENTER;
        let (lat_h, lon_h) = MAP_HALF_SPAN;
        for f in sample_floats() {
            assert!((f.lat - lat_c).abs() <= lat_h, "{} lat out of view", f.id);
            assert!((f.lon - lon_c).abs() <= lon_h, "{} lon out of view", f.id);
        }
    }

    #[test]
    fn test_profile_arrays_are_paired() {
        let profile = temperature_profile();
        assert_eq!(profile.depths_m.len(), profile.temperatures_c.len());
        assert_eq!(profile.temperatures_c.first(), Some(&29.2));
        assert_eq!(profile.temperatures_c.last(), Some(&12.4));
        assert!(profile.depths_m.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_analytics_cards_order() {
        let titles: Vec<_> = analytics_cards().into_iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "Temperature Profile",
                "Salinity Distribution",
                "BGC Parameters",
                "Time Series Analysis"
            ]
        );
    }
}
