//! Prompt Registry - central registration of all prompts.
//!
//! This module provides dynamic prompt registration without modifying service.rs.
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::definitions::{GreetUserPrompt, PromptDefinition};
use super::error::PromptError;

/// Render function of a registered prompt.
pub type RenderFn = fn(&HashMap<String, String>) -> Result<String, PromptError>;

/// A registered prompt: metadata plus its render function.
#[derive(Clone)]
pub struct PromptEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: Vec<PromptArgument>,
    pub render: RenderFn,
}

/// Build a PromptEntry from a PromptDefinition.
fn build_entry<P: PromptDefinition>() -> PromptEntry {
    PromptEntry {
        name: P::NAME,
        description: P::DESCRIPTION,
        arguments: P::arguments(),
        render: P::render,
    }
}

/// Get all registered prompts.
///
/// This is the central place where all prompts are registered.
/// When adding a new prompt, add it here.
pub fn get_all_prompts() -> Vec<PromptEntry> {
    vec![build_entry::<GreetUserPrompt>()]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![GreetUserPrompt::NAME]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "greet_user");
    }

    #[test]
    fn test_prompt_names() {
        let names = prompt_names();
        assert!(names.contains(&"greet_user"));
    }

    #[test]
    fn test_entry_render_is_callable() {
        let entry = &get_all_prompts()[0];
        let mut args = HashMap::new();
        args.insert("name".to_string(), "World".to_string());
        let rendered = (entry.render)(&args).unwrap();
        assert!(rendered.contains("World"));
    }
}
