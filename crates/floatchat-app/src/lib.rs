//! floatchat-app - Application state and orchestration for Floatchat
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the message store, the deferred reply scheduler, the view
//! controller, configuration loading, and the Engine shared by the TUI and
//! headless runners.

pub mod actions;
pub mod chat_scroll;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod reply;
pub mod signals;
pub mod state;
pub mod store;

// Re-export primary types
pub use chat_scroll::ChatScrollState;
pub use config::Settings;
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use reply::{PendingReplies, ReplyTicket};
pub use state::AppState;
pub use store::MessageStore;
