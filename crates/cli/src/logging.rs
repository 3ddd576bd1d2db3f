//! Tracing subscriber setup.
//!
//! One-shot commands log to stderr. The listener owns the terminal in raw
//! mode, so it logs to a daily rolling file instead; the returned guard must
//! live until exit so buffered lines are flushed.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_NAME: &str = "devtoolbox-keys.log";

pub fn init_stderr() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Route tracing to `<log_dir>/devtoolbox-keys.log.<date>`.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
pub fn init_file(log_dir: &Path) -> Result<WorkerGuard, InitError> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();
    Ok(guard)
}
