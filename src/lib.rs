//! Datetime MCP Server Library
//!
//! This crate provides a minimal Model Context Protocol (MCP) server that
//! advertises a single tool, `get_current_datetime`, returning the server's
//! current wall-clock time as an ISO-8601 UTC timestamp.
//!
//! # Architecture
//!
//! - **core**: Configuration, the server handler, and the stdio transport
//! - **domains**: Business logic; here a single domain:
//!   - **tools**: the tool catalog, router, and the datetime tool definition
//!
//! # Example
//!
//! ```rust,no_run
//! use datetime_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, McpServer};
