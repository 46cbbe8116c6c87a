//! pagemeta - Structured Metadata for Remote Resources
//!
//! This crate resolves what a URL points at: its content type and size and,
//! for HTML documents, the title, canonical link, Open Graph properties,
//! descriptive meta tags and icons. Relative references are made absolute
//! and icons are optionally verified by probing them.
//!
//! # Architecture
//!
//! ```text
//! retrieve() ──▶ Retriever ──▶ HttpClient (HEAD / GET)
//!                    │
//!                    ▼
//!             ┌──────────────┐    ┌──────────────┐
//!             │ Extraction   │──▶ │ Icon resolve │
//!             └──────────────┘    └──────┬───────┘
//!                                        ▼
//!                                 Icon verify (concurrent)
//!                                        │
//!                                        ▼
//!                                 MetadataRecord
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pagemeta::{retrieve, RetrieveOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let record = retrieve("https://example.com", RetrieveOptions::default()).await?;
//!
//!     println!("{:?} ({:?})", record.title, record.mime);
//!     if let Some(favicon) = &record.favicon {
//!         println!("favicon: {}", favicon.url);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod address;
pub mod config;
pub mod error;
pub mod extraction;
pub mod fetch;
pub mod mime;
pub mod pipeline;
pub mod record;

// Re-exports for convenience
pub use config::ClientConfig;
pub use error::{Error, FetchError, Result};
pub use fetch::{HttpClient, ReqwestClient};
pub use pipeline::{retrieve, Prefetched, RetrieveOptions, Retriever};
pub use record::{IconRef, IconSlot, MetadataRecord, OpenGraph};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
