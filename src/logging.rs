use crate::config::LogConfig;
use crate::error::Result;
use std::fs::{self, File};
use tracing::subscriber::DefaultGuard;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Keeps the log sinks alive. Dropping it flushes the file writer and
/// uninstalls the subscriber.
pub struct LoggingContext {
    // field order matters: the subscriber goes away before its writer
    _subscriber: DefaultGuard,
    _writer: WorkerGuard,
}

/// Installs logging for the current thread: debug-level JSON to the log file
/// (truncated on every run) and a coarser human-readable stream on stderr.
pub fn init_logging(config: &LogConfig) -> Result<LoggingContext> {
    if let Some(parent) = config.file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&config.file)?;
    let (non_blocking_writer, writer_guard) = tracing_appender::non_blocking(file);

    let file_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_writer)
        .with_filter(LevelFilter::DEBUG);

    // RUST_LOG wins over the configured console level
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.console_level));
    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let subscriber = tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer);

    Ok(LoggingContext {
        _subscriber: tracing::subscriber::set_default(subscriber),
        _writer: writer_guard,
    })
}
