//! Logging setup.
//!
//! The TUI owns stdout/stderr while it runs, so logs go to a file by default:
//! `<data-local-dir>/hook-sounds/logs/hook-sounds.log`.
//!
//! Environment:
//! - `HOOK_SOUNDS_LOG`: filter directive (default given to [`LogConfig::from_env`])
//! - `HOOK_SOUNDS_LOG_DIR`: log directory override

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "HOOK_SOUNDS_LOG";
pub const LOG_DIR_ENV: &str = "HOOK_SOUNDS_LOG_DIR";
pub const LOG_FILE_NAME: &str = "hook-sounds.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `hook_sounds=debug`.
    pub level: String,
    /// Directory for the log file; no file output when `None`.
    pub directory: Option<PathBuf>,
}

impl LogConfig {
    /// Config from `HOOK_SOUNDS_LOG` / `HOOK_SOUNDS_LOG_DIR`, falling back
    /// to `default_level` and the platform data directory.
    pub fn from_env(default_level: &str) -> Self {
        let level = std::env::var(LOG_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default_level.to_string());
        let directory = std::env::var_os(LOG_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(default_log_dir);
        Self { level, directory }
    }

    pub fn with_level(mut self, level: &str) -> Self {
        self.level = level.to_string();
        self
    }

}

/// Keeps the non-blocking writer flushing; hold it until exit.
pub struct LoggingGuards {
    _file: Option<WorkerGuard>,
}

/// Default log directory for the current platform.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("hook-sounds").join("logs"))
}

/// Install the global subscriber described by `config`.
pub fn init_logging(config: &LogConfig) -> std::io::Result<LoggingGuards> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, file_guard) = match config.directory.as_deref() {
        Some(dir) => {
            let (writer, guard) = file_writer(dir)?;
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();

    Ok(LoggingGuards { _file: file_guard })
}

fn file_writer(
    dir: &Path,
) -> std::io::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(appender))
}
