//! Logging setup.
//!
//! Three `tracing-subscriber` layers share one registry:
//! - stderr console output for everything except battery audit records
//! - `drone.log` with the same events, without ANSI colors
//! - `battery.log` receiving only the battery audit target
//!
//! Console and application file honour `RUST_LOG` (default `info`); the audit file
//! always records at `info`.

use std::path::Path;

use tracing::{Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{filter_fn, FilterExt, Targets},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::server::{error::AppError, service::battery::BATTERY_AUDIT_TARGET};

pub const APP_LOG_FILE: &str = "drone.log";
pub const AUDIT_LOG_FILE: &str = "battery.log";

/// Keeps the non-blocking file writers alive.
///
/// Dropping it flushes and closes both log files.
pub struct LoggingGuard {
    _app_guard: WorkerGuard,
    _audit_guard: WorkerGuard,
}

/// Installs the global subscriber writing to the console and to `log_dir`.
///
/// # Returns
/// - `Ok(LoggingGuard)` - Logging active until the guard is dropped
/// - `Err(AppError::IoErr)` - Log directory could not be created
/// - `Err(AppError::InternalError)` - A global subscriber was already installed
pub fn init_logging(log_dir: &Path) -> Result<LoggingGuard, AppError> {
    let (subscriber, guard) = build_subscriber(log_dir)?;

    subscriber
        .try_init()
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}

/// Builds the layered subscriber without installing it.
fn build_subscriber(
    log_dir: &Path,
) -> Result<(impl Subscriber + Send + Sync + 'static, LoggingGuard), AppError> {
    std::fs::create_dir_all(log_dir)?;

    let (app_writer, app_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, APP_LOG_FILE));
    let (audit_writer, audit_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, AUDIT_LOG_FILE));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter().and(not_audit()));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(app_writer)
        .with_ansi(false)
        .with_filter(env_filter().and(not_audit()));

    let audit_layer = tracing_subscriber::fmt::layer()
        .with_writer(audit_writer)
        .with_ansi(false)
        .with_target(false)
        .with_filter(Targets::new().with_target(BATTERY_AUDIT_TARGET, Level::INFO));

    let subscriber = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(audit_layer);

    Ok((
        subscriber,
        LoggingGuard {
            _app_guard: app_guard,
            _audit_guard: audit_guard,
        },
    ))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn not_audit<S>() -> impl tracing_subscriber::layer::Filter<S> {
    filter_fn(|metadata| metadata.target() != BATTERY_AUDIT_TARGET)
}
