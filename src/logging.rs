//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays clean for response JSON. With
//! `logging.dir` set, they go to a daily rolling file instead.

use anyhow::Context as _;
use hoopfacts_core::config::{shellexpand, LoggingConfig};
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Keep the returned guard alive until exit
/// or buffered file logs are lost.
pub fn init(cfg: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));

    if cfg.dir.trim().is_empty() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
        return Ok(None);
    }

    let dir = shellexpand(&cfg.dir);
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("hoopfacts.log")
        .build(&dir)
        .with_context(|| format!("failed to open log directory {dir}"))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
    Ok(Some(guard))
}

/// Note where configuration came from. Called after [`init`] so the line
/// reaches the subscriber.
pub fn config_source(path: &str) {
    if Path::new(path).exists() {
        info!("Config loaded from {path}");
    } else {
        info!("Config file not found at {path}, using defaults");
    }
}
