//! Headless mode - NDJSON event output instead of the TUI
//!
//! Reads one prompt per stdin line and writes one JSON object per line to
//! stdout. Suitable for scripting and end-to-end tests.
//!
//! # Example Output
//!
//! ```json
//! {"event":"message","id":2,"role":"user","text":"Tell me about salinity","timestamp":1704700001000}
//! {"event":"message","id":3,"role":"assistant","text":"I found salinity data ...","timestamp":1704700002500}
//! {"event":"rejected","reason":"blank_input","timestamp":1704700003000}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use floatchat_app::EngineEvent;
use floatchat_core::prelude::*;
use floatchat_core::{ChatMessage, MessageId, Role};
use serde::Serialize;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A message was appended to the transcript
    Message {
        id: MessageId,
        role: Role,
        text: String,
        timestamp: i64,
    },

    /// A prompt was refused before reaching the assistant
    Rejected {
        reason: RejectReason,
        timestamp: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    BlankInput,
}

impl HeadlessEvent {
    pub fn message(message: &ChatMessage) -> Self {
        Self::Message {
            id: message.id,
            role: message.role,
            text: message.text.clone(),
            timestamp: message.created_at.timestamp_millis(),
        }
    }

    pub fn blank_input() -> Self {
        Self::Rejected {
            reason: RejectReason::BlankInput,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Map an engine event to its headless form, if it has one
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        match event {
            EngineEvent::MessageAppended { message } => Some(Self::message(message)),
            EngineEvent::InputRejected => Some(Self::blank_input()),
            EngineEvent::ViewChanged { .. } | EngineEvent::Shutdown => None,
        }
    }

    /// Write this event as a single JSON line
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;
        Ok(())
    }

    /// Emit this event to stdout
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }
}
