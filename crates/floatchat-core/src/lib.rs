//! # floatchat-core - Core Domain Types
//!
//! Foundation crate for Floatchat. Provides domain types, the canned-response
//! selector, static sample data, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ChatMessage`], [`MessageId`], [`Role`] - Chat transcript entries
//! - [`ViewMode`] - Chat / Map / Analytics view selection
//! - [`FloatRecord`], [`FloatStatus`] - Static ARGO float reference data
//! - [`DepthProfile`], [`AnalyticsCard`] - Analytics dashboard data
//!
//! ### Response Selection (`responder`)
//! - [`select_response()`] - Keyword-matched canned answer for a prompt
//! - [`ResponseKind`] - Which canned answer a prompt resolved to
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context

pub mod error;
pub mod logging;
pub mod responder;
pub mod sample_data;
pub mod types;

/// Prelude for common imports used throughout all Floatchat crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use responder::{select_response, ResponseKind};
pub use types::{
    status_counts, AnalyticsCard, ChatMessage, DepthProfile, FloatRecord, FloatStatus, MessageId,
    Role, ViewMode,
};
