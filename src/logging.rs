//! Process-wide logging sinks
//!
//! Two destinations share one timestamped line format: the console at the
//! configured level and a per-day file at full detail. `init` is guarded so
//! a second call never registers duplicate sinks; the returned guard flushes
//! the file sink when dropped at process shutdown.

use crate::config::Config;
use crate::Result;
use chrono::Local;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Handle keeping the file sink alive; dropping it flushes buffered lines
pub struct LogGuard {
    _file: WorkerGuard,
}

/// Name of today's log file
pub fn log_file_name() -> String {
    format!("insider_automation_{}.log", Local::now().format("%Y%m%d"))
}

/// Initialize the process-wide logging sinks
///
/// Returns `Ok(None)` when logging was already initialized; the first
/// caller owns the guard and should keep it alive until shutdown.
pub fn init(config: &Config) -> Result<Option<LogGuard>> {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(None);
    }

    std::fs::create_dir_all(&config.log_dir)?;
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_dir.join(log_file_name()))?;
    let (file_writer, guard) = tracing_appender::non_blocking(file);

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let console_layer = tracing_subscriber::fmt::layer().with_filter(console_filter);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_filter(EnvFilter::new("debug"));

    // A subscriber registered elsewhere (e.g. by a test harness) wins
    if tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return Ok(None);
    }

    Ok(Some(LogGuard { _file: guard }))
}
