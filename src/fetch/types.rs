//! Response types and the HTTP client trait

use crate::error::FetchError;
use crate::mime;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Outcome of a headers-only probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResponse {
    /// Final URL after any redirects
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Raw `Content-Type` header
    pub content_type: Option<String>,
    /// Declared `Content-Length`
    pub content_length: Option<u64>,
}

impl ProbeResponse {
    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Content type without parameters, if one was declared
    pub fn mime(&self) -> Option<String> {
        self.content_type
            .as_deref()
            .map(mime::essence)
            .filter(|m| !m.is_empty())
    }
}

/// A fetched document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Status, headers and final URL of the GET
    pub response: ProbeResponse,
    /// Decoded body text
    pub body: String,
}

/// HTTP collaborator used by the pipeline
///
/// Both calls must follow redirects and report the final URL. They fail
/// only on transport-level problems; a non-2xx status is returned as a
/// normal response and judged by the caller.
pub trait HttpClient: Send + Sync {
    /// Issue a HEAD request
    fn head(&self, url: &str) -> impl Future<Output = Result<ProbeResponse, FetchError>> + Send;

    /// Issue a GET request and read the body
    fn get(&self, url: &str) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}
