//! Confluence REST client for content search.
//!
//! Queries the document search endpoint with a title-contains OR
//! text-contains CQL predicate, limited to five candidates with expanded
//! storage bodies. Ranking is first-result-wins; the caller picks.

use serde::Deserialize;
use tracing::debug;

use super::super::common::BridgeError;
use crate::core::config::ConfluenceConfig;

/// Number of candidates requested from the search endpoint.
const SEARCH_LIMIT: &str = "5";

/// Response body of a content search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<PageResult>,
}

/// A single page candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResult {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<PageBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageBody {
    #[serde(default)]
    pub storage: Option<StorageBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageBody {
    #[serde(default)]
    pub value: String,
}

impl PageResult {
    /// The raw stored body content, empty if the expansion was missing.
    pub fn content(&self) -> &str {
        self.body
            .as_ref()
            .and_then(|b| b.storage.as_ref())
            .map(|s| s.value.as_str())
            .unwrap_or("")
    }
}

/// Thin client over the Confluence content-search endpoint.
pub struct ConfluenceClient<'a> {
    config: &'a ConfluenceConfig,
}

impl<'a> ConfluenceClient<'a> {
    /// Create a client borrowing the given configuration.
    pub fn new(config: &'a ConfluenceConfig) -> Self {
        Self { config }
    }

    /// Build the CQL query for a free-text title.
    ///
    /// When a space key is configured the query is additionally restricted
    /// to that space.
    fn build_cql(&self, title: &str) -> String {
        let cql = format!(r#"title ~ "{title}" OR text ~ "{title}""#);
        match &self.config.space_key {
            Some(space) => format!(r#"({cql}) AND space = "{space}""#),
            None => cql,
        }
    }

    /// Search for pages matching the given title or text.
    pub fn search(&self, title: &str) -> Result<SearchResponse, BridgeError> {
        let url = format!("{}/rest/api/content/search", self.config.domain);
        let cql = self.build_cql(title);
        debug!("GET {} cql={}", url, cql);

        let response = reqwest::blocking::Client::new()
            .get(&url)
            .basic_auth(&self.config.email, Some(&self.config.api_token))
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("cql", cql.as_str()),
                ("limit", SEARCH_LIMIT),
                ("expand", "body.storage"),
            ])
            .send()?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().unwrap_or_default();
            return Err(BridgeError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = response.json()?;
        Ok(parsed)
    }

    /// Browsable URL for a page identifier.
    pub fn page_url(&self, id: &str) -> String {
        format!("{}/pages/{}", self.config.domain, id)
    }
}
