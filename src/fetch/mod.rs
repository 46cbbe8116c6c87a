//! HTTP access module
//!
//! This module defines the [`HttpClient`] seam the pipeline talks through
//! and its reqwest-backed implementation.

mod client;
pub mod types;

pub use client::ReqwestClient;
pub use types::{FetchedPage, HttpClient, ProbeResponse};
