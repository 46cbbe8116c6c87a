//! Error types for pagemeta
//!
//! This module provides the error hierarchy used across the crate, built
//! with `thiserror`. Failures on the sequential path (probe, fetch, parse)
//! surface as [`Error`]; individual icon probe failures are [`FetchError`]s
//! that the verifier absorbs.

use thiserror::Error;

/// The main error type for pagemeta operations
#[derive(Error, Debug)]
pub enum Error {
    /// The address handed to the pipeline is not a usable URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The initial type probe could not complete
    #[error("Probe failed: {0}")]
    Probe(#[source] FetchError),

    /// The document body fetch failed after a successful probe
    #[error("Fetch failed: {0}")]
    Fetch(#[source] FetchError),

    /// Markup could not be turned into a document
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// The HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by a single HTTP exchange
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request URL was rejected before sending
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete in time
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    /// DNS, connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP error {status}: {message}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Reason phrase or message
        message: String,
    },

    /// The response body could not be read
    #[error("Body read failed: {0}")]
    Body(String),
}

/// Content extraction errors
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Invalid selector
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// Result type alias for pagemeta operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error came from the network rather than from bad input
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Probe(_) | Error::Fetch(_))
    }
}

impl FetchError {
    /// Classify a reqwest error
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(timeout_ms)
        } else if err.is_builder() {
            FetchError::InvalidUrl(err.to_string())
        } else if err.is_body() || err.is_decode() {
            FetchError::Body(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("").to_string(),
            }
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_error_display() {
        let err = Error::Probe(FetchError::Network("dns failure".to_string()));
        assert!(err.to_string().contains("Probe failed"));
        assert!(err.to_string().contains("dns failure"));
        assert!(err.is_network());
    }

    #[test]
    fn test_http_status_error() {
        let err = FetchError::HttpStatus {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error 404: Not Found");
    }

    #[test]
    fn test_invalid_url_is_not_network() {
        let err = Error::InvalidUrl("abc".to_string());
        assert!(!err.is_network());
        assert_eq!(err.to_string(), "Invalid URL: abc");
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;
        let err = Error::Fetch(FetchError::Timeout(500));
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Request timed out after 500ms"));
    }
}
