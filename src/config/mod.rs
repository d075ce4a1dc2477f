//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (service endpoint, status literals, defaults)
//! - Library configuration (`Config`)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputFormat};
