//! Main application modules.
//!
//! This module provides output formatting used by the command-line binary.

pub mod output;

// Re-export public API
pub use output::format_location;
