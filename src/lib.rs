//! Ops Bridge MCP Server
//!
//! An MCP (Model Context Protocol) server that bridges monitoring alerts to
//! Atlassian services: it can fabricate a sample Grafana alert, open a JIRA
//! issue from an alert record, and search Confluence for an existing
//! solution.
//!
//! # Layout
//!
//! - [`core`] - configuration, errors, the protocol handler, and the
//!   transport layer (STDIO by default, HTTP behind the `http` feature)
//! - [`domains`] - the actual functionality, split into `tools` (alert
//!   source, ticket creation, solution search, echo), `resources`, and
//!   `prompts`
//!
//! # Example
//!
//! ```rust,no_run
//! use ops_bridge_mcp_server::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Hand the server to a transport...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
