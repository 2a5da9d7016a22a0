//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;

use super::definitions::{ConfluenceSearchTool, EchoTool, GrafanaAlertTool, JiraCreateIssueTool};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            ConfluenceSearchTool::NAME,
            EchoTool::NAME,
            GrafanaAlertTool::NAME,
            JiraCreateIssueTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ConfluenceSearchTool::to_tool(),
            EchoTool::to_tool(),
            GrafanaAlertTool::to_tool(),
            JiraCreateIssueTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            ConfluenceSearchTool::NAME => {
                ConfluenceSearchTool::http_handler(arguments, self.config.clone())
            }
            EchoTool::NAME => EchoTool::http_handler(arguments),
            GrafanaAlertTool::NAME => GrafanaAlertTool::http_handler(arguments),
            JiraCreateIssueTool::NAME => {
                JiraCreateIssueTool::http_handler(arguments, self.config.clone())
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_config());
        let names = registry.tool_names();
        assert_eq!(names.len(), 4);
        assert!(names.contains(&"echo"));
        assert!(names.contains(&"grafana_get_alert"));
        assert!(names.contains(&"jira_create_issue"));
        assert!(names.contains(&"confluence_search_solution"));
    }

    #[test]
    fn test_get_all_tools_metadata() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 4);
        for tool in &tools {
            assert!(tool.description.is_some());
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_echo() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("echo", serde_json::json!({ "text": "ping" }));
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("unknown", serde_json::json!({}));
        assert!(result.is_err());
    }
}
