//! Resources domain.
//!
//! Resources are readable data the server exposes by URI: the static server
//! info document and the parameterized `greeting://{name}` template. Each
//! fixed resource lives under `definitions/` and implements
//! [`ResourceDefinition`]; `registry.rs` collects resources and templates,
//! and `service.rs` serves listing and reads. Adding a resource means adding
//! a definition file and one registry line.

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{DynamicResourceType, ResourceContent, ResourceEntry, ResourceService};
