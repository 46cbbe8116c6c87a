//! Document metadata extraction
//!
//! This module reads the title, canonical link, Open Graph properties,
//! descriptive meta tags and icon links out of a parsed HTML document.
//! Every reference is resolved against the document's base URL before it
//! is stored.

use crate::address;
use crate::error::{ExtractionError, Result};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

/// Icon references declared by the document, already absolute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconLinks {
    /// `<link rel="shortcut icon">` (or `rel="icon"`)
    pub favicon: Option<String>,
    /// `<link rel="apple-touch-icon">`
    pub apple_touch_icon: Option<String>,
    /// `<meta property="og:image">`
    pub og_image: Option<String>,
}

/// Document-derived fields, fixed before icon verification starts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// First `<title>` text
    pub title: Option<String>,
    /// Absolute canonical URL
    pub canonical: Option<String>,
    /// `description` meta
    pub description: Option<String>,
    /// `keywords` meta
    pub keywords: Option<String>,
    /// og:title
    pub og_title: Option<String>,
    /// og:description
    pub og_description: Option<String>,
    /// og:email
    pub og_email: Option<String>,
    /// Declared icon references
    pub icons: IconLinks,
}

enum LinkRel {
    Favicon,
    AppleTouchIcon,
    Canonical,
}

impl LinkRel {
    fn parse(rel: &str) -> Option<Self> {
        let normalized = rel
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();

        match normalized.as_str() {
            "shortcut icon" | "icon" => Some(LinkRel::Favicon),
            "apple-touch-icon" | "apple-touch-icon-precomposed" => Some(LinkRel::AppleTouchIcon),
            "canonical" => Some(LinkRel::Canonical),
            _ => None,
        }
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ExtractionError::InvalidSelector(format!("{}: {:?}", css, e)).into())
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Metadata extraction functionality
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Parse markup and extract its metadata
    pub fn extract_from_markup(markup: &str, base: Option<&Url>) -> Result<DocumentMetadata> {
        let document = Html::parse_document(markup);
        Self::extract(&document, base)
    }

    /// Extract metadata from a parsed document
    ///
    /// Links and meta tags are visited in document order and a later match
    /// overwrites an earlier one. Without a base URL only references that
    /// are already absolute are kept.
    #[instrument(skip(document, base), fields(base = base.map(Url::as_str)))]
    pub fn extract(document: &Html, base: Option<&Url>) -> Result<DocumentMetadata> {
        let mut metadata = DocumentMetadata {
            title: Self::title(document)?,
            ..Default::default()
        };

        Self::read_links(document, base, &mut metadata)?;
        Self::read_meta(document, base, &mut metadata)?;

        debug!(
            title = ?metadata.title,
            canonical = ?metadata.canonical,
            favicon = ?metadata.icons.favicon,
            apple_touch_icon = ?metadata.icons.apple_touch_icon,
            og_image = ?metadata.icons.og_image,
            "Extracted document metadata"
        );

        Ok(metadata)
    }

    fn title(document: &Html) -> Result<Option<String>> {
        let title = selector("title")?;
        Ok(document
            .select(&title)
            .next()
            .and_then(|el| non_empty(&el.text().collect::<String>())))
    }

    fn read_links(
        document: &Html,
        base: Option<&Url>,
        metadata: &mut DocumentMetadata,
    ) -> Result<()> {
        let links = selector("link")?;

        for link in document.select(&links) {
            let element = link.value();
            let Some(rel) = element.attr("rel").and_then(LinkRel::parse) else {
                continue;
            };
            let Some(href) = element.attr("href").and_then(|h| resolve_ref(base, h)) else {
                continue;
            };

            match rel {
                LinkRel::Favicon => metadata.icons.favicon = Some(href),
                LinkRel::AppleTouchIcon => metadata.icons.apple_touch_icon = Some(href),
                LinkRel::Canonical => metadata.canonical = Some(href),
            }
        }

        Ok(())
    }

    fn read_meta(
        document: &Html,
        base: Option<&Url>,
        metadata: &mut DocumentMetadata,
    ) -> Result<()> {
        let metas = selector("meta")?;

        for meta in document.select(&metas) {
            let element = meta.value();
            let Some(key) = element
                .attr("property")
                .and_then(non_empty)
                .or_else(|| element.attr("name").and_then(non_empty))
            else {
                continue;
            };
            let Some(content) = element.attr("content").and_then(non_empty) else {
                continue;
            };

            match key.to_ascii_lowercase().as_str() {
                "og:image" => {
                    if let Some(image) = resolve_ref(base, &content) {
                        metadata.icons.og_image = Some(image);
                    }
                }
                "og:title" => metadata.og_title = Some(content),
                "og:description" => metadata.og_description = Some(content),
                "og:email" => metadata.og_email = Some(content),
                "description" => metadata.description = Some(content),
                "keywords" => metadata.keywords = Some(content),
                _ => {}
            }
        }

        Ok(())
    }
}

fn resolve_ref(base: Option<&Url>, reference: &str) -> Option<String> {
    match base {
        Some(base) => address::resolve(base, reference),
        None => address::UrlValidator::parse_base(reference).map(|url| url.to_string()),
    }
}
