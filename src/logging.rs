//! Logging setup
//!
//! The TUI owns the terminal, so log output goes to a daily rolling file in
//! the log directory instead of stderr. `RUST_LOG` takes precedence over the
//! `log_filter` setting.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{Settings, StepperPaths};

/// Prefix of the rolling log files
pub const LOG_FILE_PREFIX: &str = "stepper.log";

/// Install the global subscriber
///
/// The returned guard flushes buffered lines when dropped, so keep it alive
/// until the process exits.
pub fn init_logging(paths: &StepperPaths, settings: &Settings) -> Result<WorkerGuard> {
    let log_dir = paths.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("can't create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(build_filter(&settings.log_filter)?)
        .with(fmt_layer)
        .try_init()
        .context("can't install tracing subscriber")?;

    Ok(guard)
}

/// Build the filter from `RUST_LOG`, falling back to `configured`
pub fn build_filter(configured: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directive = configured.trim();
    let directive = if directive.is_empty() { "info" } else { directive };

    EnvFilter::builder()
        .parse(directive)
        .with_context(|| format!("invalid log filter '{}'", directive))
}
