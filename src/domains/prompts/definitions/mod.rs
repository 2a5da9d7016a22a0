//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with:
//! - Metadata (name, description, arguments)
//! - A render function producing the user message
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod greet_user;

pub use greet_user::GreetUserPrompt;

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and
/// rendering logic.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;

    /// Render the user message for the given arguments.
    ///
    /// Required arguments are validated by the service before this is called,
    /// so implementations may treat their presence as given but must still
    /// not panic on absence.
    fn render(arguments: &HashMap<String, String>) -> Result<String, PromptError>;
}
