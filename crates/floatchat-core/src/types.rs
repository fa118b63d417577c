//! Core domain types

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Chat Messages
// ─────────────────────────────────────────────────────────────────────────────

/// Identifier of a chat message, unique and increasing within a session
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl MessageId {
    /// The identifier that follows this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Typed by the person at the keyboard
    User,
    /// Produced by the canned-response assistant
    Assistant,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Floatchat",
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Role::User)
    }
}

/// A single entry in the chat transcript.
///
/// Messages are immutable once created; the only producer is the message
/// store, which assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    pub created_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(id: MessageId, role: Role, text: impl Into<String>) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            created_at: Local::now(),
        }
    }

    /// Time of day shown under the message bubble
    pub fn formatted_time(&self) -> String {
        self.created_at.format("%H:%M:%S").to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Views
// ─────────────────────────────────────────────────────────────────────────────

/// The three mutually exclusive main views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Chat,
    Map,
    Analytics,
}

impl ViewMode {
    /// All views in sidebar order
    pub const ALL: [ViewMode; 3] = [ViewMode::Chat, ViewMode::Map, ViewMode::Analytics];

    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::Chat => "Float-chat",
            ViewMode::Map => "ARGO Float Map",
            ViewMode::Analytics => "Data Analytics",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            ViewMode::Chat => "Ask questions about oceanographic data",
            ViewMode::Map => "Real-time float positions and status",
            ViewMode::Analytics => "Visualize and analyze ocean data",
        }
    }

    /// Label used in the sidebar navigation
    pub fn nav_label(&self) -> &'static str {
        match self {
            ViewMode::Chat => "Chat",
            ViewMode::Map => "Map View",
            ViewMode::Analytics => "Analytics",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ViewMode::Chat => 0,
            ViewMode::Map => 1,
            ViewMode::Analytics => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Float Data
// ─────────────────────────────────────────────────────────────────────────────

/// Transmission status of an ARGO float
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatStatus {
    Active,
    Inactive,
}

impl FloatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloatStatus::Active => "active",
            FloatStatus::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, FloatStatus::Active)
    }
}

impl std::fmt::Display for FloatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static reference record for one float
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatRecord {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    /// Surface temperature in °C
    pub temperature: f64,
    /// Salinity in PSU
    pub salinity: f64,
    pub status: FloatStatus,
}

/// Count active and inactive floats, in that order
pub fn status_counts(floats: &[FloatRecord]) -> (usize, usize) {
    let active = floats.iter().filter(|f| f.status.is_active()).count();
    (active, floats.len() - active)
}

/// Temperature against depth for a single cast.
///
/// `depths_m` and `temperatures_c` are paired by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthProfile {
    pub depths_m: Vec<f64>,
    pub temperatures_c: Vec<f64>,
}

impl DepthProfile {
    /// Zip the paired arrays into `(temperature, depth)` chart points
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.temperatures_c
            .iter()
            .copied()
            .zip(self.depths_m.iter().copied())
            .collect()
    }

    pub fn max_depth(&self) -> f64 {
        self.depths_m.iter().copied().fold(0.0, f64::max)
    }

    /// `(min, max)` temperature, or `None` for an empty profile
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.temperatures_c.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }
}

/// One panel of the analytics dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsCard {
    pub title: String,
    /// What the panel plots
    pub caption: String,
    pub stats: Vec<String>,
}
