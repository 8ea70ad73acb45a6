//! Command line, configuration, and logging for the Blockscout MCP server.
//!
//! # Key Abstractions
//!
//! - [`McpApp`]: Loads configuration, sets up logging and dispatches commands
//! - [`McpConfig`]: File, environment and default configuration layering

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;

pub use app::McpApp;
pub use cli::{CliArgs, Command, ConfigAction, ConfigCommand};
pub use config::McpConfig;
