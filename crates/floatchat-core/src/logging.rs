//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "FLOATCHAT_LOG";

const LOG_FILE_PREFIX: &str = "floatchat.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/floatchat/logs/` so they never
/// interfere with the terminal UI or headless stdout.
/// Log level is controlled by the `FLOATCHAT_LOG` environment variable.
///
/// # Examples
/// ```bash
/// FLOATCHAT_LOG=debug cargo run
/// FLOATCHAT_LOG=floatchat_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("floatchat=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Floatchat starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("floatchat").join("logs")
}

/// Get the log file path for the current day
///
/// The daily appender suffixes the file with the UTC date.
pub fn get_current_log_file() -> PathBuf {
    let date = chrono::Utc::now().format("%Y-%m-%d");
    get_log_directory().join(format!("{}.{}", LOG_FILE_PREFIX, date))
}
