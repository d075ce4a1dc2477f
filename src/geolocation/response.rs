//! Response parsing.
//!
//! The service always answers with a JSON object whose `status` field tells
//! success (`"success"`, full location record) from failure (`"fail"`, with a
//! human-readable `message`). HTTP status codes carry no such distinction.

use log::debug;
use serde_json::Value;

use super::types::GeoLocation;
use crate::config::{STATUS_FAIL, STATUS_SUCCESS};
use crate::error_handling::GeoLocatorError;

/// Parses a raw response body into a [`GeoLocation`].
///
/// # Errors
///
/// - `InvalidArgumentError` with the service's message when `status` is `"fail"`
/// - `InternalError` when the body is not a JSON object with a known string
///   `status`, or when a success/fail document lacks the fields that go with it
pub fn parse_response(body: &str) -> Result<GeoLocation, GeoLocatorError> {
    let document: Value = serde_json::from_str(body).map_err(|e| {
        GeoLocatorError::InternalError(format!("body is not valid JSON: {}", e))
    })?;

    let status = document
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| GeoLocatorError::InternalError("missing status field".to_string()))?;
    debug!("Response status: {}", status);

    match status {
        STATUS_SUCCESS => serde_json::from_value(document).map_err(|e| {
            GeoLocatorError::InternalError(format!("malformed location record: {}", e))
        }),
        STATUS_FAIL => {
            let message = document
                .get("message")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    GeoLocatorError::InternalError(
                        "fail response without a message".to_string(),
                    )
                })?;
            Err(GeoLocatorError::InvalidArgumentError(message.to_string()))
        }
        other => Err(GeoLocatorError::InternalError(format!(
            "unknown status {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS_BODY: &str = r#"{
        "status": "success",
        "country": "United States",
        "countryCode": "US",
        "region": "CA",
        "regionName": "California",
        "city": "Mountain View",
        "zip": "94043",
        "lat": 37.4056,
        "lon": -122.0775,
        "timezone": "America/Los_Angeles",
        "isp": "Google LLC",
        "org": "Google Public DNS",
        "as": "AS15169 Google LLC",
        "query": "8.8.8.8"
    }"#;

    #[test]
    fn test_parse_success_maps_every_field() {
        let location = parse_response(SUCCESS_BODY).unwrap();
        assert_eq!(
            location,
            GeoLocation {
                status: "success".to_string(),
                country: Some("United States".to_string()),
                country_code: Some("US".to_string()),
                region: Some("CA".to_string()),
                region_name: Some("California".to_string()),
                city: Some("Mountain View".to_string()),
                zip: Some("94043".to_string()),
                latitude: Some(37.4056),
                longitude: Some(-122.0775),
                timezone: Some("America/Los_Angeles".to_string()),
                isp: Some("Google LLC".to_string()),
                org: Some("Google Public DNS".to_string()),
                autonomous_system: Some("AS15169 Google LLC".to_string()),
                query: Some("8.8.8.8".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_success_ignores_unknown_fields() {
        let body = r#"{"status":"success","query":"1.1.1.1","mobile":false,"proxy":true,"extra":{"a":1}}"#;
        let location = parse_response(body).unwrap();
        assert_eq!(location.query.as_deref(), Some("1.1.1.1"));
        assert_eq!(location.city, None);
    }

    #[test]
    fn test_parse_success_with_empty_strings() {
        // The service reports unknown values as empty strings
        let body = r#"{"status":"success","zip":"","org":"","query":"1.1.1.1"}"#;
        let location = parse_response(body).unwrap();
        assert_eq!(location.zip.as_deref(), Some(""));
        assert_eq!(location.org.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_fail_returns_invalid_argument_with_message() {
        let body = r#"{"status":"fail","message":"invalid query"}"#;
        match parse_response(body) {
            Err(GeoLocatorError::InvalidArgumentError(message)) => {
                assert_eq!(message, "invalid query")
            }
            other => panic!("Expected InvalidArgumentError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_fail_with_query_field() {
        let body = r#"{"status":"fail","message":"private range","query":"192.168.1.1"}"#;
        let err = parse_response(body).unwrap_err();
        assert_eq!(err.to_string(), "private range");
    }

    #[test]
    fn test_parse_missing_status_is_internal() {
        let body = r#"{"country":"United States","query":"8.8.8.8"}"#;
        let err = parse_response(body).unwrap_err();
        assert!(
            matches!(err, GeoLocatorError::InternalError(_)),
            "Missing status must not be reported as InvalidArgumentError"
        );
    }

    #[test]
    fn test_parse_unknown_status_is_internal() {
        let body = r#"{"status":"pending"}"#;
        let err = parse_response(body).unwrap_err();
        assert!(matches!(err, GeoLocatorError::InternalError(_)));
        assert!(err.to_string().contains("pending"));
    }

    #[test]
    fn test_parse_non_string_status_is_internal() {
        let err = parse_response(r#"{"status":1}"#).unwrap_err();
        assert!(matches!(err, GeoLocatorError::InternalError(_)));
    }

    #[test]
    fn test_parse_fail_without_message_is_internal() {
        let err = parse_response(r#"{"status":"fail"}"#).unwrap_err();
        assert!(matches!(err, GeoLocatorError::InternalError(_)));
    }

    #[test]
    fn test_parse_malformed_json_is_internal() {
        let err = parse_response("<html>Service Unavailable</html>").unwrap_err();
        assert!(matches!(err, GeoLocatorError::InternalError(_)));
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_parse_non_object_json_is_internal() {
        for body in ["[]", "\"success\"", "null", "42"] {
            let err = parse_response(body).unwrap_err();
            assert!(
                matches!(err, GeoLocatorError::InternalError(_)),
                "Body {} should be rejected as internal",
                body
            );
        }
    }

    #[test]
    fn test_parse_success_with_wrong_field_type_is_internal() {
        let body = r#"{"status":"success","lat":"north"}"#;
        let err = parse_response(body).unwrap_err();
        assert!(matches!(err, GeoLocatorError::InternalError(_)));
        assert!(err.to_string().contains("malformed location record"));
    }
}
