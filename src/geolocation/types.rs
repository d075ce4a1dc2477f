//! Geolocation data structures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Geolocation information returned by a successful lookup.
///
/// Field names map onto the service's JSON keys (`countryCode`, `regionName`,
/// `lat`, `lon`, `as`, ...). Keys the service adds later are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    /// Service status indicator (always `"success"` for a returned record)
    pub status: String,
    /// Country name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 country code (e.g., "US")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Region/state short code (e.g., "CA")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Region/state name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    /// City name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Postal/zip code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Latitude in degrees
    #[serde(rename = "lat", default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in degrees
    #[serde(rename = "lon", default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// IANA timezone (e.g., "America/Los_Angeles")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Internet service provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isp: Option<String>,
    /// Organization name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    /// AS number and description (e.g., "AS15169 Google LLC")
    #[serde(rename = "as", default, skip_serializing_if = "Option::is_none")]
    pub autonomous_system: Option<String>,
    /// IP address the service resolved the target to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(query) = &self.query {
            write!(f, "{}: ", query)?;
        }

        let place: Vec<&str> = [&self.city, &self.region_name, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect();
        if place.is_empty() {
            f.write_str("unknown location")?;
        } else {
            f.write_str(&place.join(", "))?;
        }

        if let (Some(lat), Some(lon)) = (self.latitude, self.longitude) {
            write!(f, " ({}, {})", lat, lon)?;
        }
        Ok(())
    }
}
