//! The MCP server handler.
//!
//! `McpServer` is the single protocol-facing type: rmcp drives it over STDIO,
//! and the HTTP transport calls its JSON helper methods directly. All real
//! work lives in the domain services; this file only wires requests to them.
//!
//! Tool calls are dispatched through the dynamic `ToolRouter` built in
//! `domains/tools/router.rs`, so registering a new tool never touches this
//! file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    prompts::PromptService, resources::ResourceService, tools::build_tool_router,
};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

/// Protocol handler bridging MCP requests to the domain services.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,
    resource_service: Arc<ResourceService>,
    prompt_service: Arc<PromptService>,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Build a server from a loaded configuration.
    ///
    /// The configuration is shared by reference with every tool route, so
    /// upstream credentials flow by parameter rather than through globals.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        Self {
            tool_router: build_tool_router::<Self>(config.clone()),
            resource_service: Arc::new(ResourceService::new(config.resources.clone())),
            prompt_service: Arc::new(PromptService::new(config.prompts.clone())),
            config,
        }
    }

    /// Server name as reported to clients.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Server version as reported to clients.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Shared configuration handle.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

/// JSON helpers for the stateless HTTP transport.
///
/// These mirror the `ServerHandler` methods but speak plain `serde_json`
/// values, which is what the JSON-RPC layer works with.
#[cfg(feature = "http")]
impl McpServer {
    /// List all available tools.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| {
                serde_json::json!({
                    "name": tool.name,
                    "description": tool.description,
                    "inputSchema": tool.input_schema
                })
            })
            .collect()
    }

    /// Dispatch a tool call through the registry.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        ToolRegistry::new(self.config.clone()).call_tool(name, arguments)
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        self.resource_service
            .list_resources()
            .await
            .into_iter()
            .map(|resource| {
                serde_json::json!({
                    "uri": resource.uri,
                    "name": resource.name,
                    "description": resource.description,
                    "mimeType": resource.mime_type
                })
            })
            .collect()
    }

    /// List all registered resource templates.
    pub async fn list_resource_templates(&self) -> Vec<serde_json::Value> {
        self.resource_service
            .list_resource_templates()
            .await
            .into_iter()
            .map(|template| {
                serde_json::json!({
                    "uriTemplate": template.raw.uri_template,
                    "name": template.raw.name,
                    "title": template.raw.title,
                    "description": template.raw.description,
                    "mimeType": template.raw.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, String> {
        let result = self
            .resource_service
            .read_resource(uri)
            .await
            .map_err(|e| e.to_string())?;

        Ok(serde_json::json!({ "contents": result.contents }))
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<serde_json::Value> {
        self.prompt_service
            .list_prompts()
            .await
            .into_iter()
            .map(|prompt| {
                serde_json::json!({
                    "name": prompt.name,
                    "description": prompt.description,
                    "arguments": prompt.arguments
                })
            })
            .collect()
    }

    /// Render a prompt by name with string arguments.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, String> {
        let args = arguments.and_then(|value| {
            value.as_object().map(|object| {
                object
                    .iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
        });

        let result = self
            .prompt_service
            .get_prompt(name, args)
            .await
            .map_err(|e| e.to_string())?;

        Ok(serde_json::json!({
            "description": result.description,
            "messages": result.messages
        }))
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Ops bridge server: generate a sample Grafana alert, create a JIRA issue \
                 from an alert record, or search Confluence for an existing solution."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.resource_service.list_resources().await,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        Ok(ListResourceTemplatesResult {
            resource_templates: self.resource_service.list_resource_templates().await,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        Ok(ListPromptsResult {
            prompts: self.prompt_service.list_prompts().await,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.map(|map| {
            map.into_iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                .collect()
        });
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_identity_from_config() {
        let server = McpServer::new(Config::default());
        assert_eq!(server.name(), "ops-bridge-mcp");
        assert!(!server.version().is_empty());
    }

    #[test]
    fn test_get_info_advertises_all_capabilities() {
        let server = McpServer::new(Config::default());
        let info = server.get_info();
        let capabilities = info.capabilities;
        assert!(capabilities.tools.is_some());
        assert!(capabilities.resources.is_some());
        assert!(capabilities.prompts.is_some());
        assert!(info.instructions.unwrap().contains("JIRA"));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_helpers_list_everything() {
        let server = McpServer::new(Config::default());
        assert_eq!(server.list_tools().len(), 4);
        assert_eq!(server.list_resources().await.len(), 1);
        assert_eq!(server.list_prompts().await.len(), 1);
    }
}
