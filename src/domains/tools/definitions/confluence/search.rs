//! Confluence solution-search tool.
//!
//! Looks up existing runbook or solution pages for an alert title. The top
//! candidate is returned with its URL and stored content; an empty result
//! set is a normal outcome, not an error.

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

use super::super::common::{BridgeError, error_result, structured_result, success_result};
use super::client::ConfluenceClient;
use crate::core::config::Config;

/// Parameters for the solution-search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConfluenceSearchParams {
    /// Free-text title to search for.
    #[schemars(description = "Alert or issue title to search solutions for")]
    pub title: String,
}

/// Structured output for a found solution page.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SolutionResult {
    pub title: String,
    pub url: String,
    pub content: String,
}

/// Confluence solution-search tool implementation.
#[derive(Debug, Clone)]
pub struct ConfluenceSearchTool;

impl ConfluenceSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "confluence_search_solution";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Search Confluence for an existing solution page matching an alert title. Returns \
         the best-matching page with its URL and content, or reports that no solution \
         exists yet.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &ConfluenceSearchParams, config: &Config) -> CallToolResult {
        let client = ConfluenceClient::new(&config.confluence);

        match client.search(&params.title) {
            Ok(response) => match response.results.first() {
                Some(page) => {
                    let url = client.page_url(&page.id);
                    info!("Found solution page {} for '{}'", page.id, params.title);
                    let solution = SolutionResult {
                        title: page.title.clone(),
                        url: url.clone(),
                        content: page.content().to_string(),
                    };
                    structured_result(
                        format!(
                            "Solution found: {}\nURL: {}\nContent:\n{}",
                            solution.title, solution.url, solution.content
                        ),
                        solution,
                    )
                }
                None => success_result("No solution found in Confluence.".to_string()),
            },
            Err(BridgeError::Upstream { status, body }) => error_result(&format!(
                "Failed to search Confluence. Status: {}, Response: {}",
                status, body
            )),
            Err(e) => error_result(&format!("Failed to search Confluence: {}", e)),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: ConfluenceSearchParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid parameters: {}", e))?;

        // Run on a separate OS thread: the tool uses reqwest::blocking, which
        // must not run inside the async runtime.
        let handle = std::thread::spawn(move || Self::execute(&params, &config));

        let result = handle
            .join()
            .map_err(|_| "Search thread panicked".to_string())?;

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
            input_schema: cached_schema_for_type::<ConfluenceSearchParams>(),
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
                let params: ConfluenceSearchParams =
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ConfluenceConfig;
    use rmcp::model::RawContent;

    fn result_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("expected text content"),
        }
    }

    fn config_for(server: &mockito::Server) -> Config {
        Config {
            confluence: ConfluenceConfig {
                domain: server.url(),
                email: "ops@example.com".to_string(),
                api_token: "token".to_string(),
                space_key: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_first_result_wins() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/rest/api/content/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"results": [
                    {"id": "123", "title": "CPU runbook", "body": {"storage": {"value": "Restart the workers."}}},
                    {"id": "456", "title": "Old CPU notes"}
                ]}"#,
            )
            .create();

        let config = config_for(&server);
        let params = ConfluenceSearchParams {
            title: "High CPU Usage Alert".to_string(),
        };

        let result = ConfluenceSearchTool::execute(&params, &config);
        assert_eq!(result.is_error, Some(false));

        let text = result_text(&result);
        assert!(text.starts_with("Solution found: CPU runbook"));
        assert!(text.contains(&format!("{}/pages/123", server.url())));
        assert!(text.contains("Restart the workers."));

        let structured = result.structured_content.expect("structured content");
        assert_eq!(structured["title"], "CPU runbook");
    }

    #[test]
    fn test_empty_results_is_not_an_error() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/rest/api/content/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"results": []}"#)
            .create();

        let config = config_for(&server);
        let params = ConfluenceSearchParams {
            title: "Brand new failure mode".to_string(),
        };

        let result = ConfluenceSearchTool::execute(&params, &config);
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_text(&result), "No solution found in Confluence.");
    }

    #[test]
    fn test_upstream_failure_echoes_status_and_body() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/rest/api/content/search")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("index unavailable")
            .create();

        let config = config_for(&server);
        let params = ConfluenceSearchParams {
            title: "High CPU".to_string(),
        };

        let result = ConfluenceSearchTool::execute(&params, &config);
        assert_eq!(result.is_error, Some(true));

        let text = result_text(&result);
        assert!(text.contains("500"));
        assert!(text.contains("index unavailable"));
    }

    #[test]
    fn test_params_deserialization() {
        let json = r#"{"title": "High CPU Usage Alert"}"#;
        let params: ConfluenceSearchParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.title, "High CPU Usage Alert");
    }
}
