//! Binary entry point for the ops-bridge MCP server.
//!
//! Loads configuration from the environment, points logging at stderr, and
//! hands the server to the configured transport.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use ops_bridge_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config.clone());
    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");
    Ok(())
}

/// Initialize tracing.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to the
/// whole crate. Output goes to stderr - stdout belongs to the STDIO
/// transport.
fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
