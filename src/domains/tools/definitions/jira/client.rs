//! JIRA REST client for issue creation.
//!
//! Performs the single authenticated POST and interprets the response status.
//! One call per tool invocation - no retry, calls are idempotent-unsafe.

use serde::Deserialize;
use tracing::debug;

use super::super::common::BridgeError;
use super::payload::IssuePayload;
use crate::core::config::JiraConfig;

/// Response body of a successful create-issue call.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub key: String,
}

/// Thin client over the JIRA create-issue endpoint.
pub struct JiraClient<'a> {
    config: &'a JiraConfig,
}

impl<'a> JiraClient<'a> {
    /// Create a client borrowing the given configuration.
    pub fn new(config: &'a JiraConfig) -> Self {
        Self { config }
    }

    /// Create an issue from the given payload.
    ///
    /// HTTP 201 is the only success status; anything else surfaces as
    /// `BridgeError::Upstream` with the raw response body.
    pub fn create_issue(&self, payload: &IssuePayload) -> Result<CreatedIssue, BridgeError> {
        let url = format!("{}/rest/api/2/issue/", self.config.domain);
        debug!("POST {}", url);

        let response = reqwest::blocking::Client::new()
            .post(&url)
            .basic_auth(&self.config.email, Some(&self.config.api_token))
            .json(payload)
            .send()?;

        let status = response.status();
        if status == reqwest::StatusCode::CREATED {
            let created: CreatedIssue = response.json()?;
            Ok(created)
        } else {
            let body = response.text().unwrap_or_default();
            Err(BridgeError::Upstream {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Browsable URL for a created issue.
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.config.domain, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(domain: &str) -> JiraConfig {
        JiraConfig {
            domain: domain.to_string(),
            project_key: "OPS".to_string(),
            email: "ops@example.com".to_string(),
            api_token: "token".to_string(),
        }
    }

    #[test]
    fn test_browse_url() {
        let config = test_config("https://company.atlassian.net");
        let client = JiraClient::new(&config);
        assert_eq!(
            client.browse_url("OPS-7"),
            "https://company.atlassian.net/browse/OPS-7"
        );
    }

    #[test]
    fn test_create_issue_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/rest/api/2/issue/")
            .match_header("authorization", mockito::Matcher::Any)
            .with_status(201)
            .with_body(r#"{"key": "PROJ-42"}"#)
            .create();

        let config = test_config(&server.url());
        let client = JiraClient::new(&config);
        let payload = super::super::payload::build_payload(&Default::default(), "PROJ");

        let created = client.create_issue(&payload).unwrap();
        assert_eq!(created.key, "PROJ-42");
        mock.assert();
    }

    #[test]
    fn test_create_issue_upstream_failure() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/rest/api/2/issue/")
            .with_status(400)
            .with_body("project key missing")
            .create();

        let config = test_config(&server.url());
        let client = JiraClient::new(&config);
        let payload = super::super::payload::build_payload(&Default::default(), "PROJ");

        let err = client.create_issue(&payload).unwrap_err();
        match err {
            BridgeError::Upstream { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "project key missing");
            }
            other => panic!("expected Upstream error, got {:?}", other),
        }
    }
}
