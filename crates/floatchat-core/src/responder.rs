//! Canned-response selection for the chat assistant.
//!
//! The assistant does not understand language. It lower-cases the prompt and
//! checks for a handful of keywords in a fixed priority order; the first hit
//! decides which canned answer is returned.

/// Answer for prompts mentioning salinity
pub const SALINITY_RESPONSE: &str = "I found salinity data in the Arabian Sea region. The average salinity values range from 35.4 to 36.2 PSU. Would you like me to show you the spatial distribution or temporal trends?";

/// Answer for prompts mentioning temperature
pub const TEMPERATURE_RESPONSE: &str = "Temperature profiles show interesting patterns. Surface temperatures are around 28-30°C in the region you specified. I can generate depth-temperature profiles if you'd like to see the thermocline structure.";

/// Answer for prompts mentioning floats
pub const FLOAT_STATUS_RESPONSE: &str = "I found 3 active ARGO floats in your specified region. Float F001 and F002 are currently transmitting data, while F003 went inactive last week. Would you like to see their locations on the map?";

/// Answer when no keyword matches
pub const FALLBACK_RESPONSE: &str = "I understand you're looking for oceanographic data. Could you specify what type of oceanographic data you're interested in? I can help with temperature, salinity, dissolved oxygen, chlorophyll, or other BGC parameters.";

/// Which canned answer a prompt resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    Salinity,
    Temperature,
    FloatStatus,
    Fallback,
}

/// Keywords in match priority order
const KEYWORDS: [(&str, ResponseKind); 3] = [
    ("salinity", ResponseKind::Salinity),
    ("temperature", ResponseKind::Temperature),
    ("float", ResponseKind::FloatStatus),
];

impl ResponseKind {
    /// Classify a prompt. First matching keyword wins.
    pub fn classify(prompt: &str) -> Self {
        let lowered = prompt.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, kind)| *kind)
            .unwrap_or(ResponseKind::Fallback)
    }

    pub fn text(&self) -> &'static str {
        match self {
            ResponseKind::Salinity => SALINITY_RESPONSE,
            ResponseKind::Temperature => TEMPERATURE_RESPONSE,
            ResponseKind::FloatStatus => FLOAT_STATUS_RESPONSE,
            ResponseKind::Fallback => FALLBACK_RESPONSE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Salinity => "salinity",
            ResponseKind::Temperature => "temperature",
            ResponseKind::FloatStatus => "float_status",
            ResponseKind::Fallback => "fallback",
        }
    }
}

/// Select the canned response for a prompt.
///
/// Total over all inputs, including the empty string (which resolves to the
/// fallback). Blank prompts are rejected before they get here.
pub fn select_response(prompt: &str) -> &'static str {
    ResponseKind::classify(prompt).text()
}
