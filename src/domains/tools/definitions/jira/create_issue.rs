//! JIRA issue-creation tool.
//!
//! Takes an alert record as a JSON string, builds the create-issue payload,
//! and files it against the configured JIRA project. The happy path returns
//! a browsable issue URL; malformed input and upstream failures come back as
//! descriptive error results without faulting the server.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{BridgeError, error_result, structured_result};
use super::client::JiraClient;
use super::payload::{build_payload, parse_alert};
use crate::core::config::Config;

/// Parameters for the issue-creation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JiraCreateIssueParams {
    /// The alert record as a JSON string (as produced by grafana_get_alert).
    #[schemars(description = "JSON string of the monitoring alert")]
    pub alert_json: String,
}

/// Structured output for a created issue.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct IssueCreated {
    pub key: String,
    pub url: String,
}

/// JIRA issue-creation tool implementation.
#[derive(Debug, Clone)]
pub struct JiraCreateIssueTool;

impl JiraCreateIssueTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "jira_create_issue";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Create a JIRA issue from a monitoring alert JSON record. The issue summary embeds \
         the server name extracted from the alert description, and the alert tags become \
         issue labels. Returns the browsable issue URL on success.";

    /// Execute the tool logic.
    ///
    /// Invalid JSON is rejected before any network call is made.
    #[instrument(skip_all)]
    pub fn execute(params: &JiraCreateIssueParams, config: &Config) -> CallToolResult {
        let alert = match parse_alert(&params.alert_json) {
            Ok(alert) => alert,
            // Renders as the literal "Invalid JSON input"
            Err(e) => return error_result(&e.to_string()),
        };

        let payload = build_payload(&alert, &config.jira.project_key);
        let client = JiraClient::new(&config.jira);

        match client.create_issue(&payload) {
            Ok(created) => {
                let url = client.browse_url(&created.key);
                info!("Created JIRA issue {}", created.key);
                structured_result(
                    format!("Jira issue created successfully! Issue URL: {}", url),
                    IssueCreated {
                        key: created.key,
                        url,
                    },
                )
            }
            Err(BridgeError::Upstream { status, body }) => error_result(&format!(
                "Failed to create Jira issue. Status: {}, Response: {}",
                status, body
            )),
            Err(e) => error_result(&format!("Failed to create Jira issue: {}", e)),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: JiraCreateIssueParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid parameters: {}", e))?;

        // Run on a separate OS thread: the tool uses reqwest::blocking, which
        // must not run inside the async runtime.
        let handle = std::thread::spawn(move || Self::execute(&params, &config));

        let result = handle
            .join()
            .map_err(|_| "Issue creation thread panicked".to_string())?;

        let mut response = serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        });

        if let Some(structured) = result.structured_content {
            if let Some(obj) = response.as_object_mut() {
                obj.insert("structuredContent".to_string(), structured);
            }
        }

        Ok(response)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<JiraCreateIssueParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: JiraCreateIssueParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                let result = tokio::task::spawn_blocking(move || Self::execute(&params, &config))
                    .await
                    .map_err(|e| {
                        McpError::internal_error(format!("Task execution failed: {}", e), None)
                    })?;

                Ok(result)
            }
            .boxed()
        })
    }
}
