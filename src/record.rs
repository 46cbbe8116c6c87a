//! Metadata record types
//!
//! [`MetadataRecord`] is the single value a retrieval produces. Its JSON
//! form uses the field names `apple-touch-icon` and `og`, omits absent
//! fields, and always carries `og` as an object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A verified icon reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRef {
    /// Content type reported by the icon probe, `null` when the server sent none
    pub mime: Option<String>,
    /// Absolute icon URL
    pub url: String,
}

/// Named icon positions in the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconSlot {
    /// `favicon`
    Favicon,
    /// `apple-touch-icon`
    AppleTouchIcon,
    /// `og.image`
    OgImage,
}

impl IconSlot {
    /// All slots, in record order
    pub const ALL: [IconSlot; 3] = [IconSlot::Favicon, IconSlot::AppleTouchIcon, IconSlot::OgImage];

    /// Host-root path probed when the document declares no link for this slot
    pub fn default_path(self) -> Option<&'static str> {
        match self {
            IconSlot::Favicon => Some("/favicon.ico"),
            IconSlot::AppleTouchIcon => Some("/apple-touch-icon.png"),
            IconSlot::OgImage => None,
        }
    }
}

impl fmt::Display for IconSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IconSlot::Favicon => "favicon",
            IconSlot::AppleTouchIcon => "apple-touch-icon",
            IconSlot::OgImage => "og:image",
        };
        f.write_str(name)
    }
}

/// Open Graph sub-record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraph {
    /// og:title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// og:description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// og:email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// og:image, present only once verified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<IconRef>,
}

impl OpenGraph {
    /// Whether no Open Graph field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.email.is_none()
            && self.image.is_none()
    }
}

/// Resolved metadata for one address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Final URL after redirects
    pub url: String,
    /// Content type without parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    /// Declared content length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Absolute canonical URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    /// `description` meta tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `keywords` meta tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Verified favicon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<IconRef>,
    /// Verified apple-touch-icon
    #[serde(
        rename = "apple-touch-icon",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub apple_touch_icon: Option<IconRef>,
    /// Open Graph data
    #[serde(default)]
    pub og: OpenGraph,
}

impl MetadataRecord {
    /// Icon held in `slot`, if verified
    pub fn icon(&self, slot: IconSlot) -> Option<&IconRef> {
        match slot {
            IconSlot::Favicon => self.favicon.as_ref(),
            IconSlot::AppleTouchIcon => self.apple_touch_icon.as_ref(),
            IconSlot::OgImage => self.og.image.as_ref(),
        }
    }

    pub(crate) fn set_icon(&mut self, slot: IconSlot, icon: IconRef) {
        match slot {
            IconSlot::Favicon => self.favicon = Some(icon),
            IconSlot::AppleTouchIcon => self.apple_touch_icon = Some(icon),
            IconSlot::OgImage => self.og.image = Some(icon),
        }
    }
}
