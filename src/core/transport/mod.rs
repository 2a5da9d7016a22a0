//! Transport layer.
//!
//! Two ways to reach the server, both feature-gated:
//! - `stdio` (default): standard MCP over stdin/stdout
//! - `http`: stateless JSON-RPC over HTTP POST
//!
//! `TransportService` picks one from configuration and runs it; everything
//! protocol-shaped is delegated to `McpServer`.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
