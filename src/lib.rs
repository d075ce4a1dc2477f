//! geolocator library: IP address and host name geolocation
//!
//! This library looks up geographic and network information about an IP address
//! or host name (or, without a target, about the machine running the code) using
//! the [ip-api.com](http://ip-api.com/) JSON service.
//!
//! # Example
//!
//! ```no_run
//! use geolocator::{GeoLocator, GeoLocatorError};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let locator = GeoLocator::new()?;
//! match locator.locate(Some("8.8.8.8")).await {
//!     Ok(location) => println!("{}", location),
//!     Err(GeoLocatorError::InvalidArgumentError(message)) => {
//!         eprintln!("service rejected the target: {}", message)
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async and require a Tokio runtime.

#![warn(missing_docs)]

pub mod app;
pub mod config;
mod error_handling;
mod geolocation;
pub mod initialization;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt, OutputFormat};
pub use error_handling::{ErrorKind, GeoLocatorError, InitializationError, TransportError};
pub use geolocation::{build_request_url, parse_response, GeoLocation, GeoLocator};
