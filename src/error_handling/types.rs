//! Error type definitions.
//!
//! This module defines the errors returned by lookups and by application setup.

use std::string::FromUtf8Error;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured service URL cannot be used as a request base.
    #[error("Invalid service URL {url:?}: {reason}")]
    ServiceUrlError {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Transport-level failures while talking to the geolocation service.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, DNS, timeout, HTTP error status or body read failure.
    #[error("{0}")]
    Request(#[from] ReqwestError),

    /// The response body was not valid UTF-8.
    #[error("response body is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// Errors returned by a geolocation lookup.
///
/// Every failure maps to exactly one of three kinds (see [`ErrorKind`]).
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum GeoLocatorError {
    /// The request could not be completed or its body could not be read.
    #[error("I/O error: {0}")]
    IoError(#[from] TransportError),

    /// The service rejected the target; carries the service's message.
    #[error("{0}")]
    InvalidArgumentError(String),

    /// The response does not follow the service's JSON contract.
    #[error("Invalid response: {0}")]
    InternalError(String),
}

impl From<ReqwestError> for GeoLocatorError {
    fn from(e: ReqwestError) -> Self {
        GeoLocatorError::IoError(TransportError::Request(e))
    }
}

impl From<FromUtf8Error> for GeoLocatorError {
    fn from(e: FromUtf8Error) -> Self {
        GeoLocatorError::IoError(TransportError::Encoding(e))
    }
}

impl GeoLocatorError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeoLocatorError::IoError(_) => ErrorKind::Io,
            GeoLocatorError::InvalidArgumentError(_) => ErrorKind::InvalidArgument,
            GeoLocatorError::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// Formats the error followed by each cause in its source chain.
    ///
    /// Causes whose text is already part of the message are skipped, so the
    /// transport detail wrapped by `IoError` is not repeated.
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }
}

/// The three kinds of lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// Transport failure (connectivity, timeout, encoding)
    Io,
    /// Target rejected by the service or unusable as a path segment
    InvalidArgument,
    /// Response contract violation
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    /// Returns a human-readable name for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Io => "I/O error",
            ErrorKind::InvalidArgument => "Invalid argument",
            ErrorKind::Internal => "Internal error",
        }
    }

    /// Process exit code the CLI uses for this kind of failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::Io => 1,
            ErrorKind::InvalidArgument => 2,
            ErrorKind::Internal => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_report_does_not_repeat_wrapped_cause() {
        let utf8 = String::from_utf8(vec![0xff]).unwrap_err();
        let err = GeoLocatorError::from(utf8);
        assert_eq!(err.report(), err.to_string());
        assert!(err.report().starts_with("I/O error: response body is not valid UTF-8"));
    }

    #[test]
    fn test_report_of_error_without_source() {
        let err = GeoLocatorError::InvalidArgumentError("invalid query".to_string());
        assert_eq!(err.report(), "invalid query");
    }

    #[test]
    fn test_error_kind_as_str() {
        assert_eq!(ErrorKind::Io.as_str(), "I/O error");
        assert_eq!(ErrorKind::InvalidArgument.as_str(), "Invalid argument");
        assert_eq!(ErrorKind::Internal.as_str(), "Internal error");
    }

    #[test]
    fn test_error_kind_display_matches_as_str() {
        for kind in ErrorKind::iter() {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let codes: Vec<i32> = ErrorKind::iter().map(|k| k.exit_code()).collect();
        assert!(codes.iter().all(|&c| c != 0));
        let mut deduped = codes.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), codes.len(), "Exit codes must be distinct");
    }

    #[test]
    fn test_invalid_argument_displays_service_message_verbatim() {
        let err = GeoLocatorError::InvalidArgumentError("invalid query".to_string());
        assert_eq!(err.to_string(), "invalid query");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_internal_error_display() {
        let err = GeoLocatorError::InternalError("missing status field".to_string());
        assert_eq!(err.to_string(), "Invalid response: missing status field");
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_utf8_error_converts_to_io() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = GeoLocatorError::from(utf8_err);
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_service_url_error_display() {
        let err = InitializationError::ServiceUrlError {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"not a url\""));
        assert!(msg.contains("relative URL without a base"));
    }
}
