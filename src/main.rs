//! Floatchat - chat, map and analytics over ARGO float data
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use floatchat_app::config::{self, Settings};
use floatchat_core::prelude::*;

/// Floatchat - explore ARGO oceanographic float data from the terminal
#[derive(Parser, Debug)]
#[command(name = "floatchat")]
#[command(about = "Chat, map and analytics over ARGO float data", long_about = None)]
struct Args {
    /// Run in headless mode (prompts on stdin, NDJSON on stdout, no TUI)
    #[arg(long)]
    headless: bool,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Path to a config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the assistant reply delay in milliseconds
    #[arg(long, value_name = "MS")]
    reply_delay_ms: Option<u64>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    /// Apply command-line overrides on top of loaded settings
    fn apply(&self, settings: &mut Settings) {
        if self.dark {
            settings.ui.dark_mode = true;
        }
        if let Some(ms) = self.reply_delay_ms {
            settings.chat.reply_delay_ms = ms;
        }
    }

    fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(config::default_config_path)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config_path()
            .ok_or_else(|| Error::config("No config directory available"))?;
        let written = config::init_config_file(&path)?;
        println!("{}", written.display());
        return Ok(());
    }

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI and headless output own stdout)
    floatchat_core::logging::init()?;

    let mut settings = config::load_settings_from(args.config_path().as_deref());
    args.apply(&mut settings);
    debug!("Effective settings: {:?}", settings);

    let result = if args.headless {
        floatchat::run_headless(settings).await
    } else {
        floatchat::run(settings).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        eprintln!(
            "floatchat: {}\nSee {} for details",
            e,
            floatchat_core::logging::get_current_log_file().display()
        );
    }

    info!("Floatchat exiting");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["floatchat"]);
        assert!(!args.headless);
        assert!(!args.dark);
        assert!(args.reply_delay_ms.is_none());
    }

    #[test]
    fn test_overrides_apply_to_settings() {
        let args = Args::parse_from(["floatchat", "--dark", "--reply-delay-ms", "20"]);
        let mut settings = Settings::default();
        args.apply(&mut settings);

        assert!(settings.ui.dark_mode);
        assert_eq!(settings.chat.reply_delay_ms, 20);
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let args = Args::parse_from(["floatchat", "--config", "/tmp/fc.toml", "--headless"]);
        assert!(args.headless);
        assert_eq!(args.config_path(), Some(PathBuf::from("/tmp/fc.toml")));
    }
}
