//! storefront-api - HTTP client for the remote product catalog
//!
//! Wraps the two read-only catalog endpoints behind [`CatalogClient`].
//! Responses are deserialized and validated against the explicit schema
//! in `storefront-core`; everything else is an error.

pub mod client;

pub use client::{CatalogClient, DEFAULT_BASE_URL};
