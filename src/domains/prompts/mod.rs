//! Prompts domain.
//!
//! Prompts are reusable message templates a client can instantiate with
//! arguments. Each prompt lives in its own file under `definitions/` and
//! implements [`PromptDefinition`]; `registry.rs` collects them and
//! `service.rs` serves listing, argument validation, and rendering. Adding a
//! prompt means adding a definition file and one registry line.

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::PromptService;
