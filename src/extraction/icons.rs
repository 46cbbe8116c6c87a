//! Icon resolution and verification
//!
//! The resolver turns declared icon links into a candidate list, adding
//! host-root defaults for the favicon and apple-touch-icon. The verifier
//! probes every candidate concurrently, waits for all of them to settle,
//! and keeps only those that answered with a 2xx status.

use crate::address;
use crate::error::FetchError;
use crate::extraction::metadata::IconLinks;
use crate::fetch::HttpClient;
use crate::record::{IconRef, IconSlot};
use futures::future::join_all;
use tracing::{debug, instrument};
use url::Url;

/// A URL to probe for one icon slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCandidate {
    /// Slot the icon fills
    pub slot: IconSlot,
    /// Absolute URL to probe
    pub url: String,
    /// Whether the document declared it (as opposed to a host-root default)
    pub declared: bool,
}

/// Outcome of probing one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    /// The probed candidate
    pub candidate: IconCandidate,
    /// Verified icon or the reason it was dropped
    pub outcome: Result<IconRef, FetchError>,
}

/// Computes candidate icon URLs
pub struct IconResolver;

impl IconResolver {
    /// Candidates for every slot, in slot order
    ///
    /// Declared links are used as-is. A missing favicon or apple-touch-icon
    /// falls back to its host-root default; og:image has no default and is
    /// omitted when undeclared.
    pub fn candidates(links: &IconLinks, base: &Url) -> Vec<IconCandidate> {
        IconSlot::ALL
            .into_iter()
            .filter_map(|slot| {
                let declared = match slot {
                    IconSlot::Favicon => links.favicon.as_ref(),
                    IconSlot::AppleTouchIcon => links.apple_touch_icon.as_ref(),
                    IconSlot::OgImage => links.og_image.as_ref(),
                };

                match declared {
                    Some(url) => Some(IconCandidate {
                        slot,
                        url: url.clone(),
                        declared: true,
                    }),
                    None => slot
                        .default_path()
                        .and_then(|path| address::host_root(base, path))
                        .map(|url| IconCandidate {
                            slot,
                            url,
                            declared: false,
                        }),
                }
            })
            .collect()
    }
}

/// Probes icon candidates through an [`HttpClient`]
pub struct IconVerifier<'a, C> {
    client: &'a C,
}

impl<'a, C: HttpClient> IconVerifier<'a, C> {
    /// Create a verifier over `client`
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Probe all candidates concurrently and report each outcome
    ///
    /// Resolves once every probe has settled; a failure never cuts the
    /// others short.
    pub async fn settle_all(&self, candidates: Vec<IconCandidate>) -> Vec<Settled> {
        let probes = candidates.into_iter().map(|candidate| async move {
            let outcome = self.probe(&candidate).await;
            Settled { candidate, outcome }
        });

        join_all(probes).await
    }

    /// Probe all candidates and keep the verified icons
    #[instrument(skip(self, candidates), fields(count = candidates.len()))]
    pub async fn verify(&self, candidates: Vec<IconCandidate>) -> Vec<(IconSlot, IconRef)> {
        self.settle_all(candidates)
            .await
            .into_iter()
            .filter_map(|settled| match settled.outcome {
                Ok(icon) => {
                    debug!(slot = %settled.candidate.slot, url = %icon.url, mime = ?icon.mime, "Icon verified");
                    Some((settled.candidate.slot, icon))
                }
                Err(e) => {
                    debug!(
                        slot = %settled.candidate.slot,
                        url = %settled.candidate.url,
                        declared = settled.candidate.declared,
                        error = %e,
                        "Icon dropped"
                    );
                    None
                }
            })
            .collect()
    }

    async fn probe(&self, candidate: &IconCandidate) -> Result<IconRef, FetchError> {
        let response = self.client.head(&candidate.url).await?;

        if !response.is_success() {
            return Err(FetchError::HttpStatus {
                status: response.status,
                message: format!("{} probe rejected", candidate.slot),
            });
        }

        Ok(IconRef {
            mime: response.mime(),
            url: candidate.url.clone(),
        })
    }
}
