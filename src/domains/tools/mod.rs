//! Tools domain.
//!
//! Every callable tool lives in its own file under `definitions/`, carrying
//! its parameter struct, `execute()`, HTTP handler, and route constructor.
//! `router.rs` assembles the rmcp `ToolRouter` for STDIO; `registry.rs` is
//! the matching dispatch table for the HTTP transport. The two are kept in
//! sync by tests.
//!
//! To add a tool: write the definition file, export it in
//! `definitions/mod.rs`, then register it in both `router.rs` and
//! `registry.rs`.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
