//! Metadata retrieval pipeline
//!
//! Drives one lookup end to end:
//!
//! ```text
//! probe (HEAD) ──▶ HTML? ──yes──▶ fetch (GET) ──▶ extract ──┐
//!                    │                                      ▼
//!                    └──no──────────────────────────▶ resolve icons ──▶ verify (concurrent) ──▶ record
//! ```
//!
//! Probe and fetch failures end the lookup with an error and no record.
//! Icon probe failures only remove that icon from the record. The record
//! is handed back after every icon probe has settled.

use crate::address::{self, UrlValidator};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::extraction::{DocumentMetadata, IconResolver, IconVerifier, MetadataExtractor};
use crate::fetch::{HttpClient, ReqwestClient};
use crate::mime;
use crate::record::{MetadataRecord, OpenGraph};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Options for a single retrieval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrieveOptions {
    /// Resolve and verify icons (default: true)
    pub extended: bool,
}

impl Default for RetrieveOptions {
    fn default() -> Self {
        Self { extended: true }
    }
}

impl RetrieveOptions {
    /// Options with icon enrichment turned off
    pub fn without_icons() -> Self {
        Self { extended: false }
    }
}

/// Transport facts for markup the caller already holds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefetched {
    /// Content type of the markup
    pub mime: Option<String>,
    /// Address the markup was loaded from
    pub base_url: String,
    /// Size in bytes
    pub bytes: Option<u64>,
}

/// Fields known from the transport alone
struct Transport {
    url: String,
    mime: Option<String>,
    bytes: Option<u64>,
}

/// Resolves metadata records through an [`HttpClient`]
pub struct Retriever<C> {
    client: C,
}

impl Retriever<ReqwestClient> {
    /// Create a retriever backed by reqwest
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(ReqwestClient::new(config)?))
    }
}

impl<C: HttpClient> Retriever<C> {
    /// Create a retriever over `client`
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The underlying client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Retrieve metadata for `address`
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`] if `address` is not a usable http(s) URL
    /// - [`Error::Probe`] if the type probe fails
    /// - [`Error::Fetch`] if the document body cannot be fetched
    #[instrument(skip(self))]
    pub async fn retrieve(&self, address: &str, options: RetrieveOptions) -> Result<MetadataRecord> {
        let target = normalize_address(address)?;
        info!(url = %target, "Retrieving metadata");

        let probe = self
            .client
            .head(target.as_str())
            .await
            .map_err(Error::Probe)?;

        if !probe.is_success() {
            warn!(status = probe.status, url = %probe.url, "Probe returned non-success status");
        }

        let transport = Transport {
            url: probe.url.clone(),
            mime: probe.mime(),
            bytes: probe.content_length,
        };
        let base = UrlValidator::parse_base(&transport.url);

        let document = if transport.mime.as_deref().is_some_and(mime::is_html) {
            let page = self
                .client
                .get(&transport.url)
                .await
                .map_err(Error::Fetch)?;
            Some(MetadataExtractor::extract_from_markup(
                &page.body,
                base.as_ref(),
            )?)
        } else {
            debug!(mime = ?transport.mime, "Not an HTML document, skipping fetch");
            None
        };

        Ok(self.assemble(transport, document, base, options).await)
    }

    /// Build a record from markup the caller already fetched
    ///
    /// Skips the probe and fetch stages. Icons are only verified when
    /// `base_url` is a usable http(s) URL.
    #[instrument(skip(self, markup), fields(base_url = %prefetched.base_url))]
    pub async fn retrieve_prefetched(
        &self,
        markup: &str,
        prefetched: Prefetched,
        options: RetrieveOptions,
    ) -> Result<MetadataRecord> {
        let base = UrlValidator::parse_base(&prefetched.base_url);
        let document = MetadataExtractor::extract_from_markup(markup, base.as_ref())?;

        let transport = Transport {
            url: base
                .as_ref()
                .map(Url::to_string)
                .unwrap_or(prefetched.base_url),
            mime: prefetched.mime.as_deref().map(mime::essence),
            bytes: prefetched.bytes,
        };

        Ok(self.assemble(transport, Some(document), base, options).await)
    }

    async fn assemble(
        &self,
        transport: Transport,
        document: Option<DocumentMetadata>,
        base: Option<Url>,
        options: RetrieveOptions,
    ) -> MetadataRecord {
        let document = document.unwrap_or_default();

        let mut record = MetadataRecord {
            url: transport.url,
            mime: transport.mime,
            bytes: transport.bytes,
            title: document.title,
            canonical: document.canonical,
            description: document.description,
            keywords: document.keywords,
            og: OpenGraph {
                title: document.og_title,
                description: document.og_description,
                email: document.og_email,
                image: None,
            },
            ..Default::default()
        };

        let candidates = match (&base, options.extended) {
            (Some(base), true) => IconResolver::candidates(&document.icons, base),
            (None, true) => {
                debug!("No usable base URL, skipping icon verification");
                Vec::new()
            }
            (_, false) => Vec::new(),
        };

        if !candidates.is_empty() {
            let verified = IconVerifier::new(&self.client).verify(candidates).await;
            for (slot, icon) in verified {
                record.set_icon(slot, icon);
            }
        }

        info!(
            url = %record.url,
            mime = ?record.mime,
            title = ?record.title,
            favicon = record.favicon.is_some(),
            "Metadata retrieved"
        );
        record
    }
}

/// Parse `address` into an http(s) URL, adding `http://` to bare hosts
fn normalize_address(address: &str) -> Result<Url> {
    let trimmed = address.trim();

    UrlValidator::parse_base(trimmed)
        .or_else(|| {
            if trimmed.contains("://") || !address::is_url(trimmed) {
                return None;
            }
            UrlValidator::parse_base(&format!("http://{}", trimmed.trim_start_matches("//")))
        })
        .ok_or_else(|| Error::InvalidUrl(address.to_string()))
}

/// Retrieve metadata for `address` with a reqwest client configured from the environment
pub async fn retrieve(address: &str, options: RetrieveOptions) -> Result<MetadataRecord> {
    Retriever::from_config(ClientConfig::from_env()?)?
        .retrieve(address, options)
        .await
}
