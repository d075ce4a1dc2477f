//! HTTP client initialization.
//!
//! This module builds the `reqwest::Client` and validates the service URL
//! that a [`GeoLocator`](crate::GeoLocator) is constructed from.

use std::time::Duration;

use reqwest::ClientBuilder;
use url::Url;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client with settings from the configuration.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Overall request timeout, if one is configured
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut builder = ClientBuilder::new().user_agent(config.user_agent.clone());
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Parses and validates the configured service URL.
///
/// The URL must be absolute and use `http` or `https`, which guarantees that a
/// target can be appended to it as a path segment.
///
/// # Errors
///
/// Returns `InitializationError::ServiceUrlError` describing why the URL was rejected.
pub fn init_service_url(raw: &str) -> Result<Url, InitializationError> {
    let rejected = |reason: String| InitializationError::ServiceUrlError {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| rejected(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(rejected(format!("unsupported scheme {:?}", url.scheme())));
    }
    Ok(url)
}
