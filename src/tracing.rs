//! Logging infrastructure
//!
//! Structured logging for the viewer, with console filtering via RUST_LOG
//! and a rotating debug log under the config directory.
//!
//! # Usage
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=glance::update=debug` - module-level filtering
//!
//! # Log files
//!
//! Logs are written to `~/.config/glance/logs/glance.log` with daily
//! rotation. File logging uses debug level for troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing subscriber with console and file logging.
///
/// Returns a guard that must stay alive for the duration of the program so
/// buffered file output gets flushed.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let (file_layer, guard) = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "glance.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("File logging disabled: {}", e);
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
