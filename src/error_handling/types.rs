//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
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
}

/// Error types for a single audit run.
///
/// Every variant is terminal: the run is one-shot, so there is no retry or
/// partial recovery. Each error is surfaced to the user in full and the
/// process exits non-zero.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The mode selector was not recognized. No network call is made.
    #[error("Invalid mode selector '{0}' (expected 'web' or 'api')")]
    InvalidMode(String),

    /// The target URL failed validation or normalization. No network call is made.
    #[error("Invalid target URL: {0}")]
    InvalidUrl(String),

    /// DNS, connect, TLS, or timeout failure during the fetch.
    /// No header data arrived, so no partial report is produced.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),

    /// The user interrupted the run while the request was in flight.
    #[error("Aborted by user")]
    Aborted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_mode_message_names_the_selector() {
        let err = AuditError::InvalidMode("3".to_string());
        let msg = err.to_string();
        assert!(msg.contains('3'), "message should name the selector: {msg}");
        assert!(msg.contains("web"), "message should list valid modes: {msg}");
    }

    #[test]
    fn test_invalid_url_message() {
        let err = AuditError::InvalidUrl("ftp://example.com".to_string());
        assert!(err.to_string().contains("ftp://example.com"));
    }

    #[test]
    fn test_aborted_message() {
        assert_eq!(AuditError::Aborted.to_string(), "Aborted by user");
    }
}
