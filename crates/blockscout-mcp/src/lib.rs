//! MCP server exposing Blockscout on-chain data as tools.
//!
//! - [`requests`]: Tool argument types and their JSON schemas
//! - [`tools`]: [`OnChainServer`] and its tool router
//! - [`server`]: `ServerHandler` implementation and stdio serving
//! - [`error`]: Mapping of core errors onto MCP error codes

pub mod error;
pub mod requests;
pub mod server;
pub mod tools;

pub use error::McpErrorExt;
pub use server::{INSTRUCTIONS, serve_stdio};
pub use tools::{OnChainServer, serialize_response};
