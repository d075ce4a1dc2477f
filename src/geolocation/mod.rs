//! IP address and host name geolocation using the ip-api.com service.
//!
//! A lookup builds the request URL from an optional target, performs one GET
//! request, and turns the JSON body into a [`GeoLocation`] or a typed error.

mod lookup;
mod request;
mod response;
mod types;

// Re-export public API
pub use lookup::GeoLocator;
pub use request::build_request_url;
pub use response::parse_response;
pub use types::GeoLocation;
