//! Ticket payload builder.
//!
//! Maps an alert record to a JIRA create-issue request body. Pure functions,
//! no network access - parse failures surface as `BridgeError::InvalidInput`
//! before any request is attempted.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

use super::super::common::BridgeError;
use super::super::grafana::Alert;

/// Placeholder used when no server identifier is found in the description.
pub const UNKNOWN_SERVER: &str = "Unknown Server";

/// Issue type every bridged alert is filed as.
const ISSUE_TYPE: &str = "Epic";

static SERVER_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"server-[\w-]+").expect("hard-coded pattern compiles"));

/// JIRA create-issue request body.
#[derive(Debug, Clone, Serialize)]
pub struct IssuePayload {
    pub fields: IssueFields,
}

/// The `fields` object of a create-issue request.
#[derive(Debug, Clone, Serialize)]
pub struct IssueFields {
    pub project: ProjectRef,
    pub summary: String,
    pub description: String,
    pub issuetype: IssueTypeRef,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRef {
    pub key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueTypeRef {
    pub name: String,
}

/// Parse caller-supplied alert JSON.
///
/// Any syntactically invalid input is rejected here, before a payload is
/// built or a request sent.
pub fn parse_alert(alert_json: &str) -> Result<Alert, BridgeError> {
    serde_json::from_str(alert_json).map_err(|e| {
        debug!("Alert payload is not valid JSON: {}", e);
        BridgeError::InvalidInput(e.to_string())
    })
}

/// Extract a server identifier from an alert description.
///
/// Matches the first `server-<token>` substring; absence of a match yields
/// the `Unknown Server` placeholder.
pub fn extract_server_name(description: &str) -> String {
    SERVER_NAME_RE
        .find(description)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_SERVER.to_string())
}

/// Build the create-issue payload for an alert.
///
/// The summary embeds the extracted server name, the description carries the
/// full alert context block, and labels are copied verbatim from the tags.
pub fn build_payload(alert: &Alert, project_key: &str) -> IssuePayload {
    let description = alert.description.as_deref().unwrap_or("");
    let server_name = extract_server_name(description);

    let summary = format!(
        "{} on {}",
        alert.title.as_deref().unwrap_or("No Title"),
        server_name
    );

    let body = format!(
        "\n{}\n\nGrafana Issue ID: {}\nSeverity: {}\nStatus: {}\nCreated: {}\nUpdated: {}\nTags: {}\nAssigned to: {}\n",
        description,
        alert.id.as_deref().unwrap_or(""),
        alert.severity.as_deref().unwrap_or(""),
        alert.status.as_deref().unwrap_or(""),
        alert.created_at.as_deref().unwrap_or(""),
        alert.updated_at.as_deref().unwrap_or(""),
        alert.tags.join(", "),
        alert.assigned_to.as_deref().unwrap_or(""),
    );

    IssuePayload {
        fields: IssueFields {
            project: ProjectRef {
                key: project_key.to_string(),
            },
            summary,
            description: body,
            issuetype: IssueTypeRef {
                name: ISSUE_TYPE.to_string(),
            },
            labels: alert.tags.clone(),
        },
    }
}
