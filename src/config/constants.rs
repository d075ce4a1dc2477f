//! Configuration constants.
//!
//! This module defines the fixed service endpoint, the status literals of the
//! service's JSON contract, and default values for client settings.

/// URI of the geolocation service.
///
/// The target (if any) is appended to this URI as a single escaped path segment.
/// Requests without a target are sent to this URI unchanged, and the service
/// answers with information about the caller's own public address.
pub const GEOLOCATOR_SERVICE_URI: &str = "http://ip-api.com/json/";

/// Value of the `status` field for a successful lookup.
pub const STATUS_SUCCESS: &str = "success";

/// Value of the `status` field when the service rejects the query.
pub const STATUS_FAIL: &str = "fail";

/// Default User-Agent string for requests to the geolocation service.
pub const DEFAULT_USER_AGENT: &str = concat!("geolocator/", env!("CARGO_PKG_VERSION"));
