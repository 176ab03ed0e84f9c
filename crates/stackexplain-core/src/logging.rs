//! Logging configuration using tracing
//!
//! The TUI owns the terminal, so logs never go to stdout/stderr; they are
//! written to a daily rolling file instead.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "STACKEXPLAIN_LOG";

const DEFAULT_FILTER: &str = "stackexplain=info,warn";
const LOG_FILE_NAME: &str = "stackexplain.log";

/// Initialize the logging subsystem
///
/// Logs are written to `<data_local_dir>/stackexplain/logs/`.
/// Log level is controlled by the `STACKEXPLAIN_LOG` environment variable.
///
/// # Examples
/// ```bash
/// STACKEXPLAIN_LOG=debug stackexplain
/// STACKEXPLAIN_LOG=stackexplain_client=trace stackexplain
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

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
    tracing::info!("StackExplain starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("stackexplain").join("logs")
}
