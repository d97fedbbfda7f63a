//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/avellon/logs/` so the terminal UI
/// stays clean. Log level is controlled by the `AVELLON_LOG` environment
/// variable.
///
/// # Examples
/// ```bash
/// AVELLON_LOG=debug avellon
/// AVELLON_LOG=trace avellon --page "War Room"
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "avellon.log");

    let env_filter = EnvFilter::try_from_env("AVELLON_LOG")
        .unwrap_or_else(|_| EnvFilter::new("avellon=info,warn"));

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
    tracing::info!("AVELLON console starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("avellon").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_lives_under_avellon_dir() {
        assert!(get_log_directory().ends_with("avellon/logs"));
    }
}
