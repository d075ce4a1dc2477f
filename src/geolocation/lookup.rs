//! Geolocation lookups against the remote service.

use log::{debug, info, trace};
use url::Url;

use super::request::{build_request_url, escaped_target};
use super::response::parse_response;
use super::types::GeoLocation;
use crate::config::Config;
use crate::error_handling::{GeoLocatorError, InitializationError};
use crate::initialization::{init_client, init_service_url};

/// Client for obtaining geolocation information about an IP address or host name.
///
/// Each lookup sends exactly one GET request and holds no state between calls,
/// so a single `GeoLocator` can serve concurrent lookups from several tasks.
///
/// # Example
///
/// ```no_run
/// use geolocator::GeoLocator;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let locator = GeoLocator::new()?;
/// let location = locator.locate(Some("8.8.8.8")).await?;
/// println!("{}", location);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeoLocator {
    client: reqwest::Client,
    service_url: Url,
}

impl GeoLocator {
    /// Creates a `GeoLocator` for the fixed service endpoint with default settings.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, InitializationError> {
        Self::with_config(&Config::default())
    }

    /// Creates a `GeoLocator` from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the HTTP client cannot be built or
    /// the service URL is not an absolute http(s) URL.
    pub fn with_config(config: &Config) -> Result<Self, InitializationError> {
        let service_url = init_service_url(&config.service_url)?;
        let client = init_client(config)?;
        Ok(Self {
            client,
            service_url,
        })
    }

    /// Base URL of the geolocation service.
    pub fn service_url(&self) -> &Url {
        &self.service_url
    }

    /// Returns the URL a lookup of `target` would request.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgumentError` for targets that cannot form a path segment.
    pub fn request_url(&self, target: Option<&str>) -> Result<Url, GeoLocatorError> {
        build_request_url(&self.service_url, target)
    }

    /// Returns geolocation information about the machine running the application.
    ///
    /// # Errors
    ///
    /// See [`GeoLocator::locate`].
    pub async fn locate_self(&self) -> Result<GeoLocation, GeoLocatorError> {
        self.locate(None).await
    }

    /// Returns geolocation information about the IP address or host name given.
    ///
    /// With `None`, the service reports on the address the request comes from.
    ///
    /// # Errors
    ///
    /// - `IoError` if the request fails (DNS, connection, timeout, HTTP error
    ///   status) or the body is not valid UTF-8; no parsing is attempted
    /// - `InvalidArgumentError` if the service rejects the target, or the
    ///   target is `.` or `..` (no request is sent then)
    /// - `InternalError` if the response does not follow the service's contract
    pub async fn locate(&self, target: Option<&str>) -> Result<GeoLocation, GeoLocatorError> {
        trace!("Target: {:?}", target);
        let url = self.request_url(target)?;
        match escaped_target(&url, target) {
            Some(segment) => info!("Querying geolocation information about {}", segment),
            _ => info!("Querying geolocation information about this machine"),
        }
        info!("Retrieving geolocation data from {}", url);

        let body = self.fetch_body(url).await?;
        debug!("JSON response: {}", body);

        parse_response(&body)
    }

    /// Sends the GET request and reads the whole body as UTF-8.
    async fn fetch_body(&self, url: Url) -> Result<String, GeoLocatorError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}
