//! Floatchat Library
//!
//! A terminal explorer for ARGO oceanographic float data: a keyword-driven
//! chat assistant, a float map and an analytics dashboard.

pub mod headless;

// Re-export main entry points
pub use floatchat_tui::run;
pub use headless::runner::run_headless;
