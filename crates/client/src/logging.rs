//! Tracing subscriber setup.
use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

/// Installs the global subscriber.
///
/// Logs go to stderr (warnings and up by default) unless a log directory is
/// configured, in which case they go to `hand-cricket.log.<date>` there at
/// info level.
/// The returned guard must be held until exit so buffered lines are flushed.
pub fn init(config: &CliConfig) -> Result<Option<WorkerGuard>> {
    let Some(log_dir) = &config.log_dir else {
        // stderr shares the terminal with the game, so stay quiet by default
        tracing_subscriber::fmt()
            .with_env_filter(env_filter("warn"))
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "hand-cricket.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("Logging to {}", log_dir.display());
    Ok(Some(guard))
}

/// `RUST_LOG` if set, otherwise `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
