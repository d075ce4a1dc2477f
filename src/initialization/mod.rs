//! Application initialization and resource setup.
//!
//! This module provides functions to initialize:
//! - The HTTP client used for lookups (timeouts, User-Agent)
//! - The logger (plain or JSON format)
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::{init_client, init_service_url};
pub use logger::init_logger_with;
