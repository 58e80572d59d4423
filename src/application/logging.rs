//! # Logging Setup
//!
//! Installs the global `tracing` subscriber: an `EnvFilter` (from `RUST_LOG`, else the
//! configured directive), a console layer on stderr, and an optional session log file.
//! While the file is active the console only carries warnings and errors.

use crate::domain::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Builds the filter, preferring `RUST_LOG` over the configured directive.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// With a session log file the console only shows `config.console`, so turn
/// logs stay out of the prompt. Without one it gets the main filter.
fn console_filter(config: &LoggingConfig) -> EnvFilter {
    if config.file.is_some() {
        EnvFilter::new(&config.console)
    } else {
        env_filter(config)
    }
}

/// Initializes logging. Keep the returned guard alive for the whole process,
/// dropping it flushes and stops the file writer.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match &config.file {
        Some(file) => {
            let path = Path::new(file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Log file path `{file}` has no file name"))?;
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            // Clear previous session log
            if path.exists() {
                let _ = fs::remove_file(path);
            }

            let file_appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let file_layer = file_layer.map(|layer| layer.with_filter(env_filter(config)));
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_filter(config));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
