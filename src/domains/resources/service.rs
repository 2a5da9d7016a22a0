//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::HashMap;
use tracing::info;

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::ResourcesConfig;

/// Service for managing and accessing resources.
///
/// This service maintains a registry of available resources and handles
/// resource listing and reading operations.
pub struct ResourceService {
    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content that requires computation.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Server information resource.
    ServerInfo,
}

impl ResourceService {
    /// Create a new ResourceService with the given configuration.
    pub fn new(_config: ResourcesConfig) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            resources: HashMap::new(),
            templates: Vec::new(),
        };

        // Register all resources and templates from registry
        for entry in get_all_resources() {
            service.register_resource(entry);
        }
        service.templates = get_all_resource_templates();

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// Exact registered URIs are served first; otherwise the URI is matched
    /// against the greeting template.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let Some(entry) = self.resources.get(uri) else {
            return self.read_templated_resource(uri);
        };

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Dynamic(dynamic_type) => {
                self.resolve_dynamic_content(uri, dynamic_type)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Resolve a URI against the registered templates.
    fn read_templated_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        if let Some(name) = uri.strip_prefix("greeting://") {
            if !name.is_empty() {
                return Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(format!("Hello, {}!", name), uri)],
                });
            }
        }

        Err(ResourceError::not_found(uri))
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: &DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => {
                let info = serde_json::json!({
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                });

                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&info)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let config = ResourcesConfig::default();
        let service = ResourceService::new(config);

        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 1);

        let templates = service.list_resource_templates().await;
        assert_eq!(templates.len(), 1);
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let config = ResourcesConfig::default();
        let service = ResourceService::new(config);

        let result = service.read_resource("mcp://server/info").await.unwrap();
        let text = text_of(&result);
        assert!(text.contains("version"));
    }

    #[tokio::test]
    async fn test_read_greeting_template() {
        let config = ResourcesConfig::default();
        let service = ResourceService::new(config);

        let result = service.read_resource("greeting://Alice").await.unwrap();
        assert_eq!(text_of(&result), "Hello, Alice!");
    }

    #[tokio::test]
    async fn test_read_greeting_without_name() {
        let config = ResourcesConfig::default();
        let service = ResourceService::new(config);

        let result = service.read_resource("greeting://").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let config = ResourcesConfig::default();
        let service = ResourceService::new(config);

        let result = service.read_resource("mcp://server/nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
