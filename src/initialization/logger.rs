//! Logger initialization.
//!
//! This module provides a function to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging. Log output
/// goes to stderr so that stdout only carries the lookup result.
///
/// Filters come from the `RUST_LOG` environment variable (which may also be
/// set in a `.env` file). A `level` given on the command line replaces the
/// global level and the level of this crate. With neither, the level is `info`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=geolocator=debug,reqwest=info geolocator 8.8.8.8
///
/// # Override with CLI args (takes precedence)
/// RUST_LOG=debug geolocator 8.8.8.8 --log-level warn
/// ```
pub fn init_logger_with(
    level: Option<LevelFilter>,
    format: LogFormat,
) -> Result<(), InitializationError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let mut builder = logger_builder(level, format, rust_log.as_deref());
    if let Ok(style) = std::env::var("RUST_LOG_STYLE") {
        builder.parse_write_style(&style);
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Builds the `env_logger` configuration for the given CLI level and `RUST_LOG` value.
fn logger_builder(
    level: Option<LevelFilter>,
    format: LogFormat,
    rust_log: Option<&str>,
) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    // HTTP stack caps; RUST_LOG directives for these modules replace them
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);

    let rust_log = rust_log.filter(|filters| !filters.trim().is_empty());
    match (level, rust_log) {
        (Some(level), _) => {
            if let Some(filters) = rust_log {
                builder.parse_filters(filters);
            }
            builder.filter_level(level);
            builder.filter_module("geolocator", level);
        }
        (None, Some(filters)) => {
            builder.parse_filters(filters);
        }
        (None, None) => {
            builder.filter_level(LevelFilter::Info);
        }
    }

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                let emoji = match level {
                    log::Level::Error => "❌",
                    log::Level::Warn => "⚠️",
                    log::Level::Info => "🌍",
                    log::Level::Debug => "🔍",
                    log::Level::Trace => "🔬",
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    emoji,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder
}
