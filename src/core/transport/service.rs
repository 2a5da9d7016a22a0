//! Transport selection and startup.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Runs the MCP server on the configured transport.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a transport service for the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// The selected transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Run the server; blocks until the transport shuts down.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        }
    }
}
