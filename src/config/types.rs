//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and client configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_USER_AGENT, GEOLOCATOR_SERVICE_URI};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How a resolved location is printed on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labelled, one field per line
    Plain,
    /// Pretty-printed JSON using the service's field names
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Settings passed through to the HTTP layer when a
/// [`GeoLocator`](crate::GeoLocator) is built. The service URL is fixed in
/// normal use; it is only overridden to point the client at a local server.
///
/// # Examples
///
/// ```no_run
/// use geolocator::Config;
///
/// let config = Config {
///     timeout_seconds: Some(5),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URI of the geolocation service
    pub service_url: String,

    /// Overall request timeout in seconds (`None` keeps the HTTP layer's default)
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: GEOLOCATOR_SERVICE_URI.to_string(),
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Locate the machine running the command
/// geolocator
///
/// # Locate an IP address or host name
/// geolocator 8.8.8.8
/// geolocator example.com --output json
///
/// # With a request timeout and verbose logging
/// geolocator example.com --timeout-seconds 5 --log-level debug
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "geolocator",
    about = "Looks up geolocation information about an IP address or host name."
)]
pub struct Opt {
    /// IP address or host name to locate (omit to locate this machine)
    pub target: Option<String>,

    /// Log level: error|warn|info|debug|trace (overrides RUST_LOG; info if neither is set)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Result format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Overall request timeout in seconds (no timeout if omitted)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            service_url: GEOLOCATOR_SERVICE_URI.to_string(),
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent.clone(),
        }
    }
}
