//! Blockscout core: chain registry, HTTP client, and API endpoints.
//!
//! This crate knows how to find the Blockscout explorer for a chain and how
//! to call its v2 REST API. It has no MCP dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`chain`]: Chain registry lookups and the in-memory chain cache
//! - [`client`]: [`BlockscoutClient`] and its settings
//! - [`endpoints`]: One method per Blockscout v2 endpoint
//! - [`params`]: Filter parameters for list endpoints
//! - [`query`]: Query-string and pagination encoding

pub mod chain;
pub mod client;
pub mod endpoints;
pub mod error;
mod http;
pub mod params;
pub mod query;

// Re-export key types at crate root for convenience
pub use chain::{Chain, ChainExplorer, ChainId, ChainRegistry};
pub use client::{BlockscoutClient, ClientConfig};
pub use error::{Error, Result};
pub use http::RetryPolicy;
pub use query::{PageParams, Query};
