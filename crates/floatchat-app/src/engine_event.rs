//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON lines.

use floatchat_core::{ChatMessage, ViewMode};

/// Domain events emitted by the Engine.
///
/// Broadcast after each message processing cycle, so subscribers see a
/// consistent view of state changes.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// A message was appended to the transcript
    MessageAppended { message: ChatMessage },

    /// A blank prompt was rejected and nothing was appended
    InputRejected,

    /// The main view changed
    ViewChanged { from: ViewMode, to: ViewMode },

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::MessageAppended { .. } => "message_appended",
            Self::InputRejected => "input_rejected",
            Self::ViewChanged { .. } => "view_changed",
            Self::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatchat_core::{MessageId, Role};

    #[test]
    fn test_engine_event_type_labels() {
        let event = EngineEvent::MessageAppended {
            message: ChatMessage::new(MessageId(1), Role::Assistant, "hi"),
        };
        assert_eq!(event.event_type(), "message_appended");

        assert_eq!(EngineEvent::InputRejected.event_type(), "input_rejected");
        assert_eq!(EngineEvent::Shutdown.event_type(), "shutdown");

        let event = EngineEvent::ViewChanged {
            from: ViewMode::Chat,
            to: ViewMode::Map,
        };
        assert_eq!(event.event_type(), "view_changed");
    }
}
