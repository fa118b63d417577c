//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use floatchat_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "floatchat";

const DEFAULT_CONFIG: &str = r#"# Floatchat Configuration

[chat]
# Delay before the assistant answers (milliseconds)
reply_delay_ms = 1500
# Drop pending answers when a new question is sent or the view changes
cancel_superseded_replies = false

[ui]
dark_mode = false
sidebar_open = false
show_timestamps = true
"#;

/// `~/.config/floatchat/config.toml` (platform equivalent), if a config dir exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit path, or the default location when `None`
pub fn load_settings_from(path: Option<&Path>) -> Settings {
    match path {
        Some(path) => load_settings(path),
        None => match default_config_path() {
            Some(path) => load_settings(&path),
            None => {
                debug!("No config directory available, using defaults");
                Settings::default()
            }
        },
    }
}

/// Load settings from a TOML file.
///
/// Never fails: a missing or unreadable file yields the defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file, leaving an existing one untouched.
///
/// Returns the path of the config file.
pub fn init_config_file(config_path: &Path) -> Result<PathBuf> {
    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
    } else {
        std::fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path.to_path_buf())
}
