//! Content extraction module
//!
//! This module reads metadata out of fetched documents and resolves and
//! verifies the icons they reference.

pub mod icons;
pub mod metadata;

pub use icons::{IconCandidate, IconResolver, IconVerifier, Settled};
pub use metadata::{DocumentMetadata, IconLinks, MetadataExtractor};
