//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub chat: ChatSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Chat assistant behavior
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatSettings {
    /// Artificial delay before the assistant answers, in milliseconds
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Drop in-flight replies when a new prompt is sent or the view changes.
    ///
    /// Off by default: every pending reply is delivered, even after the user
    /// has moved on.
    #[serde(default)]
    pub cancel_superseded_replies: bool,
}

impl ChatSettings {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            cancel_superseded_replies: false,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Start in dark mode
    #[serde(default)]
    pub dark_mode: bool,

    /// Start with the sidebar expanded
    #[serde(default)]
    pub sidebar_open: bool,

    /// Show the time under each chat message
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_open: false,
            show_timestamps: true,
        }
    }
}

fn default_reply_delay_ms() -> u64 {
    1500
}

fn default_true() -> bool {
    true
}
