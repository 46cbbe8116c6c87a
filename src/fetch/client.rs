//! reqwest-backed HTTP client

use crate::config::ClientConfig;
use crate::error::{Error, FetchError, Result};
use crate::fetch::types::{FetchedPage, HttpClient, ProbeResponse};
use reqwest::header::{HeaderMap, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::{debug, instrument};

/// HTTP client built on reqwest
///
/// Sends the configured identifying `User-Agent` with every request and
/// follows up to `max_redirects` redirects.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestClient {
    /// Create a client from configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_millis(config.timeout_ms))
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a client with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn probe_from(response: &reqwest::Response) -> ProbeResponse {
        let headers = response.headers();
        ProbeResponse {
            url: response.url().to_string(),
            status: response.status().as_u16(),
            content_type: header_str(headers, CONTENT_TYPE.as_str()),
            content_length: header_str(headers, CONTENT_LENGTH.as_str())
                .and_then(|v| v.trim().parse().ok()),
        }
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        FetchError::from_reqwest(err, self.config.timeout_ms)
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

impl HttpClient for ReqwestClient {
    #[instrument(skip(self))]
    async fn head(&self, url: &str) -> std::result::Result<ProbeResponse, FetchError> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let probe = Self::probe_from(&response);
        debug!(
            status = probe.status,
            final_url = %probe.url,
            content_type = ?probe.content_type,
            "HEAD complete"
        );
        Ok(probe)
    }

    #[instrument(skip(self))]
    async fn get(&self, url: &str) -> std::result::Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let probe = Self::probe_from(&response);
        let body = response.text().await.map_err(|e| self.classify(e))?;

        debug!(
            status = probe.status,
            final_url = %probe.url,
            body_len = body.len(),
            "GET complete"
        );
        Ok(FetchedPage {
            response: probe,
            body,
        })
    }
}
