//! Request URL construction.

use url::Url;

use crate::error_handling::GeoLocatorError;

/// Builds the lookup URL for `target` on top of the service base URL.
///
/// The target is percent-encoded as a single path segment (spaces, `/`, `?`,
/// `#`, `%` and non-ASCII characters are escaped) and appended to the base.
/// Without a target, or with an empty one, the base URL is returned unchanged.
///
/// # Errors
///
/// Returns `GeoLocatorError::InvalidArgumentError` for the targets `.` and `..`,
/// which cannot be expressed as a path segment.
pub fn build_request_url(base: &Url, target: Option<&str>) -> Result<Url, GeoLocatorError> {
    let mut url = base.clone();
    let target = match target {
        Some(t) if !t.is_empty() => t,
        _ => return Ok(url),
    };

    if matches!(target, "." | "..") {
        return Err(GeoLocatorError::InvalidArgumentError(format!(
            "target cannot be sent as a path segment: {:?}",
            target
        )));
    }

    // http(s) URLs always accept path segments
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(target);
    }
    Ok(url)
}

/// Returns the escaped target segment of a URL built by [`build_request_url`],
/// or `None` when the lookup has no target.
pub(crate) fn escaped_target<'a>(url: &'a Url, target: Option<&str>) -> Option<&'a str> {
    target.filter(|t| !t.is_empty())?;
    url.path_segments().and_then(|segments| segments.last())
}
