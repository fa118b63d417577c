//! Configuration file parsing for Floatchat
//!
//! Supports a single optional `config.toml`, located either at an explicit
//! path or under the platform config directory (`~/.config/floatchat/`).

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, load_settings_from};
pub use types::*;
