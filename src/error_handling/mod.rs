//! Error handling.
//!
//! This module provides the error types of the crate:
//! - Lookup errors, each belonging to one of three kinds
//! - Transport errors wrapped by the I/O kind
//! - Initialization errors raised while setting up the logger or HTTP client
//!
//! Lookup error kinds:
//! - **Io**: the request failed or the body could not be read
//! - **InvalidArgument**: the service rejected the target
//! - **Internal**: the response broke the service's JSON contract

mod types;

// Re-export public API
pub use types::{ErrorKind, GeoLocatorError, InitializationError, TransportError};
