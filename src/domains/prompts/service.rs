//! Prompt service implementation.
//!
//! The PromptService manages prompt definitions and their instantiation.
//! It maintains a registry of available prompts and handles argument
//! validation and rendering.
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new prompt does NOT require modifying this file.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::info;

use super::error::PromptError;
use super::registry::{PromptEntry, get_all_prompts};
use crate::core::config::PromptsConfig;

/// Service for managing and instantiating prompts.
///
/// This service maintains a registry of prompt entries and handles
/// prompt listing, argument validation, and rendering.
pub struct PromptService {
    /// Configuration for the prompts domain.
    #[allow(dead_code)]
    config: PromptsConfig,

    /// Registry of available prompts.
    /// Key: prompt name, Value: prompt entry
    prompts: HashMap<String, PromptEntry>,
}

impl PromptService {
    /// Create a new PromptService with the given configuration.
    pub fn new(config: PromptsConfig) -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            config,
            prompts: HashMap::new(),
        };

        // Register all prompts from registry
        for entry in get_all_prompts() {
            service.register_prompt(entry);
        }

        service
    }

    /// Register a prompt entry.
    pub fn register_prompt(&mut self, entry: PromptEntry) {
        info!("Registering prompt: {}", entry.name);
        self.prompts.insert(entry.name.to_string(), entry);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|entry| Prompt {
                name: entry.name.to_string(),
                title: None,
                description: Some(entry.description.to_string()),
                arguments: Some(entry.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt rendered with the given arguments.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let entry = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        // Validate required arguments
        for arg in &entry.arguments {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = (entry.render)(&arguments)?;

        Ok(GetPromptResult {
            description: Some(entry.description.to_string()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prompt_service_creation() {
        let config = PromptsConfig::default();
        let service = PromptService::new(config);

        let prompts = service.list_prompts().await;
        assert!(!prompts.is_empty());
    }

    #[tokio::test]
    async fn test_get_prompt_with_arguments() {
        let config = PromptsConfig::default();
        let service = PromptService::new(config);

        let mut args = HashMap::new();
        args.insert("name".to_string(), "World".to_string());

        let result = service.get_prompt("greet_user", Some(args)).await.unwrap();
        assert_eq!(result.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_get_prompt_missing_required_argument() {
        let config = PromptsConfig::default();
        let service = PromptService::new(config);

        let result = service.get_prompt("greet_user", None).await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let config = PromptsConfig::default();
        let service = PromptService::new(config);

        let result = service.get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
