//! Confluence solution-search tools.

mod client;
mod search;

pub use client::{ConfluenceClient, PageResult, SearchResponse};
pub use search::{ConfluenceSearchParams, ConfluenceSearchTool};
