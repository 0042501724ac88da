//! Logging and observability helpers.

use std::fs;
use std::path::PathBuf;

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use crate::config::app_dir;

const LOG_FILE_PREFIX: &str = "passvault.log";
const DEFAULT_FILTER: &str = "passvault=info,passvault_lib=info";

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard output, for the HTTP service
    Stdout,
    /// Standard error, for one-shot commands whose stdout is their result
    Stderr,
    /// Daily rolling file, for the terminal UI whose screen owns stdout
    File,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init_tracing(target: LogTarget) {
    match target {
        LogTarget::Stdout => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_span_events(FmtSpan::CLOSE)
                .try_init();
        }
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File => {
            let log_dir = log_directory();
            let _ = fs::create_dir_all(&log_dir);

            let file_appender: RollingFileAppender =
                tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);

            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(file_appender)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .try_init();
        }
    }
}

pub fn log_directory() -> PathBuf {
    app_dir().join("logs")
}
