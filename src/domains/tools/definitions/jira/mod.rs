//! JIRA issue-creation tools.
//!
//! - `payload.rs` - alert parsing and create-issue payload building (pure)
//! - `client.rs`  - the authenticated REST call
//! - `create_issue.rs` - the MCP tool wiring both together

mod client;
mod create_issue;
mod payload;

pub use client::{CreatedIssue, JiraClient};
pub use create_issue::{JiraCreateIssueParams, JiraCreateIssueTool};
pub use payload::{IssueFields, IssuePayload, build_payload, extract_server_name, parse_alert};
