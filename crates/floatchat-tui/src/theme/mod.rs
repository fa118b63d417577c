//! Centralized theme system for the light and dark palettes.
//!
//! This module provides:
//! - `palette`: Raw color sets for each mode
//! - `styles`: Semantic style builder functions
//! - `icons`: Sidebar and status glyphs

pub mod icons;
pub mod palette;
pub mod styles;

pub use palette::Palette;
