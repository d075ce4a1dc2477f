//! Rendering of lookup results for the terminal.

use crate::config::OutputFormat;
use crate::geolocation::GeoLocation;

/// Width of the label column in plain output.
const LABEL_WIDTH: usize = 14;

/// Renders a location in the requested output format.
///
/// `Plain` lists the fields the service returned, one per line; empty values
/// are left out. `Json` pretty-prints the record with the service's field names.
///
/// # Errors
///
/// Returns a `serde_json::Error` if JSON serialization fails.
pub fn format_location(
    location: &GeoLocation,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(location),
        OutputFormat::Plain => Ok(format_plain(location)),
    }
}

fn format_plain(location: &GeoLocation) -> String {
    let with_code = |name: &Option<String>, code: &Option<String>| match (
        non_empty(name),
        non_empty(code),
    ) {
        (Some(name), Some(code)) => Some(format!("{} ({})", name, code)),
        (Some(name), None) => Some(name.to_string()),
        (None, Some(code)) => Some(code.to_string()),
        (None, None) => None,
    };

    let coordinates = match (location.latitude, location.longitude) {
        (Some(lat), Some(lon)) => Some(format!("{}, {}", lat, lon)),
        _ => None,
    };

    let rows = [
        ("Query", non_empty(&location.query).map(str::to_string)),
        ("Country", with_code(&location.country, &location.country_code)),
        ("Region", with_code(&location.region_name, &location.region)),
        ("City", non_empty(&location.city).map(str::to_string)),
        ("Zip", non_empty(&location.zip).map(str::to_string)),
        ("Coordinates", coordinates),
        ("Timezone", non_empty(&location.timezone).map(str::to_string)),
        ("ISP", non_empty(&location.isp).map(str::to_string)),
        ("Organization", non_empty(&location.org).map(str::to_string)),
        (
            "AS",
            non_empty(&location.autonomous_system).map(str::to_string),
        ),
    ];

    rows.iter()
        .filter_map(|(label, value)| {
            value
                .as_ref()
                .map(|v| format!("{:<width$}{}", format!("{}:", label), v, width = LABEL_WIDTH))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
