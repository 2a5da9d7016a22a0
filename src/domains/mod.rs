//! Domain modules organized by bounded context.

pub mod prompts;
pub mod resources;
pub mod tools;
