//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod confluence;
pub mod echo;
pub mod grafana;
pub mod jira;

pub use confluence::{ConfluenceSearchParams, ConfluenceSearchTool};
pub use echo::{EchoParams, EchoTool};
pub use grafana::{Alert, GrafanaAlertParams, GrafanaAlertTool};
pub use jira::{JiraCreateIssueParams, JiraCreateIssueTool};
