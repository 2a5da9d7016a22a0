//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables at startup. Upstream credentials live here and are
//! passed by parameter into the tools that need them; there is no hidden
//! process-wide state.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// JIRA issue tracker credentials and addressing.
    pub jira: JiraConfig,

    /// Confluence knowledge base credentials and addressing.
    pub confluence: ConfluenceConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesConfig {
    // Resources are registered in domains/resources/registry.rs
    // Add resource-specific configuration here if needed.
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    // Prompts are registered in domains/prompts/registry.rs
    // Add prompt-specific configuration here if needed.
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// JIRA connection settings for the issue-creation tool.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct JiraConfig {
    /// Base URL of the JIRA instance, e.g. `https://company.atlassian.net`.
    pub domain: String,

    /// Project key that new issues are filed under.
    pub project_key: String,

    /// Account email for basic authentication.
    pub email: String,

    /// API token paired with the account email.
    pub api_token: String,
}

/// Confluence connection settings for the solution-search tool.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ConfluenceConfig {
    /// Base URL of the Confluence instance.
    pub domain: String,

    /// Account email for basic authentication.
    pub email: String,

    /// API token paired with the account email.
    pub api_token: String,

    /// Optional space key restricting search results to one space.
    pub space_key: Option<String>,
}

/// Custom Debug implementations to redact secrets from logs.
impl std::fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraConfig")
            .field("domain", &self.domain)
            .field("project_key", &self.project_key)
            .field("email", &self.email)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for ConfluenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfluenceConfig")
            .field("domain", &self.domain)
            .field("email", &self.email)
            .field("api_token", &"[REDACTED]")
            .field("space_key", &self.space_key)
            .finish()
    }
}

impl JiraConfig {
    /// Whether enough settings are present to attempt issue creation.
    pub fn is_configured(&self) -> bool {
        !self.domain.is_empty() && !self.email.is_empty() && !self.api_token.is_empty()
    }
}

impl ConfluenceConfig {
    /// Whether enough settings are present to attempt a search.
    pub fn is_configured(&self) -> bool {
        !self.domain.is_empty() && !self.email.is_empty() && !self.api_token.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "ops-bridge-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            resources: ResourcesConfig::default(),
            prompts: PromptsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            jira: JiraConfig::default(),
            confluence: ConfluenceConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server-level settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...). Upstream credentials use the
    /// conventional Atlassian variable names (`JIRA_DOMAIN`, `JIRA_EMAIL`,
    /// `CONFLUENCE_API_TOKEN`, ...).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.jira = JiraConfig::from_env();
        if config.jira.is_configured() {
            info!("JIRA credentials loaded for {}", config.jira.domain);
        } else {
            warn!(
                "JIRA is not fully configured. Set JIRA_DOMAIN, JIRA_PROJECT_KEY, \
                 JIRA_EMAIL and JIRA_API_TOKEN to enable issue creation."
            );
        }

        config.confluence = ConfluenceConfig::from_env();
        if config.confluence.is_configured() {
            info!("Confluence credentials loaded for {}", config.confluence.domain);
        } else {
            warn!(
                "Confluence is not fully configured. Set CONFLUENCE_DOMAIN, \
                 CONFLUENCE_EMAIL and CONFLUENCE_API_TOKEN to enable solution search."
            );
        }

        config
    }
}

impl JiraConfig {
    /// Load JIRA settings from environment variables.
    pub fn from_env() -> Self {
        Self {
            domain: std::env::var("JIRA_DOMAIN").unwrap_or_default(),
            project_key: std::env::var("JIRA_PROJECT_KEY").unwrap_or_default(),
            email: std::env::var("JIRA_EMAIL").unwrap_or_default(),
            api_token: std::env::var("JIRA_API_TOKEN").unwrap_or_default(),
        }
    }
}

impl ConfluenceConfig {
    /// Load Confluence settings from environment variables.
    pub fn from_env() -> Self {
        Self {
            domain: std::env::var("CONFLUENCE_DOMAIN").unwrap_or_default(),
            email: std::env::var("CONFLUENCE_EMAIL").unwrap_or_default(),
            api_token: std::env::var("CONFLUENCE_API_TOKEN").unwrap_or_default(),
            space_key: std::env::var("CONFLUENCE_SPACE_KEY").ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_jira_config_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("JIRA_DOMAIN", "https://test.atlassian.net");
            std::env::set_var("JIRA_PROJECT_KEY", "OPS");
            std::env::set_var("JIRA_EMAIL", "ops@example.com");
            std::env::set_var("JIRA_API_TOKEN", "token123");
        }
        let jira = JiraConfig::from_env();
        assert_eq!(jira.domain, "https://test.atlassian.net");
        assert_eq!(jira.project_key, "OPS");
        assert!(jira.is_configured());
        unsafe {
            std::env::remove_var("JIRA_DOMAIN");
            std::env::remove_var("JIRA_PROJECT_KEY");
            std::env::remove_var("JIRA_EMAIL");
            std::env::remove_var("JIRA_API_TOKEN");
        }
    }

    #[test]
    fn test_unconfigured_by_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("JIRA_DOMAIN");
            std::env::remove_var("CONFLUENCE_DOMAIN");
        }
        let config = Config::default();
        assert!(!config.jira.is_configured());
        assert!(!config.confluence.is_configured());
    }

    #[test]
    fn test_secrets_redacted_in_debug() {
        let jira = JiraConfig {
            domain: "https://test.atlassian.net".to_string(),
            project_key: "OPS".to_string(),
            email: "ops@example.com".to_string(),
            api_token: "super_secret_token".to_string(),
        };
        let debug_str = format!("{:?}", jira);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));

        let confluence = ConfluenceConfig {
            api_token: "another_secret".to_string(),
            ..Default::default()
        };
        let debug_str = format!("{:?}", confluence);
        assert!(!debug_str.contains("another_secret"));
    }

    #[test]
    fn test_resources_config_carries_no_settings() {
        let json = serde_json::to_value(ResourcesConfig::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_confluence_space_key_optional() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("CONFLUENCE_SPACE_KEY");
        }
        let confluence = ConfluenceConfig::from_env();
        assert!(confluence.space_key.is_none());
    }
}
