//! Grafana alert record and the mocked alert source tool.
//!
//! The alert record is the input shape shared by all bridge tools: the mock
//! tool emits one, and the JIRA tool consumes one (possibly caller-supplied).
//! Every field is optional on input so partially-populated alerts from other
//! monitoring systems still parse.

use chrono::{Duration, Utc};
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::super::common::{error_result, structured_result};

/// A structured monitoring alert record.
///
/// Ephemeral - constructed per request, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Alert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Alert {
    /// Build the canned demonstration alert.
    pub fn sample() -> Self {
        let now = Utc::now();

        Self {
            id: Some("GRAF-001".to_string()),
            title: Some("High CPU Usage Alert".to_string()),
            alert_type: Some("Alert".to_string()),
            severity: Some("High".to_string()),
            status: Some("Open".to_string()),
            description: Some(
                "CPU usage has exceeded 90% for the last 15 minutes on server-web-01".to_string(),
            ),
            created_at: Some((now - Duration::hours(2)).to_rfc3339()),
            updated_at: Some((now - Duration::minutes(30)).to_rfc3339()),
            assigned_to: Some("ops-team@company.com".to_string()),
            tags: vec![
                "infrastructure".to_string(),
                "performance".to_string(),
                "urgent".to_string(),
            ],
        }
    }
}

/// Parameters for the mocked alert source tool (none needed).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GrafanaAlertParams {}

/// Mocked Grafana alert source tool.
#[derive(Debug, Clone)]
pub struct GrafanaAlertTool;

impl GrafanaAlertTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "grafana_get_alert";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get a sample Grafana alert for demonstration. Returns one alert record as a JSON \
         string, suitable as input for jira_create_issue.";

    /// Execute the tool logic.
    pub fn execute(_params: &GrafanaAlertParams) -> CallToolResult {
        info!("Producing sample Grafana alert");

        let alert = Alert::sample();
        match serde_json::to_string(&alert) {
            Ok(json) => structured_result(json, alert),
            Err(e) => error_result(&format!("Failed to serialize alert: {}", e)),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: GrafanaAlertParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid parameters: {}", e))?;

        let result = Self::execute(&params);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GrafanaAlertParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: GrafanaAlertParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_sample_alert_shape() {
        let alert = Alert::sample();
        assert_eq!(alert.id.as_deref(), Some("GRAF-001"));
        assert_eq!(alert.severity.as_deref(), Some("High"));
        assert!(alert.description.as_deref().unwrap().contains("server-web-01"));
        assert_eq!(alert.tags.len(), 3);
    }

    #[test]
    fn test_alert_parses_with_missing_fields() {
        let alert: Alert = serde_json::from_str(r#"{"title": "Disk full"}"#).unwrap();
        assert_eq!(alert.title.as_deref(), Some("Disk full"));
        assert!(alert.id.is_none());
        assert!(alert.tags.is_empty());
    }

    #[test]
    fn test_execute_returns_json_text() {
        let result = GrafanaAlertTool::execute(&GrafanaAlertParams::default());
        assert_eq!(result.is_error, Some(false));

        let RawContent::Text(text) = &result.content[0].raw else {
            panic!("expected text content");
        };
        let parsed: Alert = serde_json::from_str(&text.text).unwrap();
        assert_eq!(parsed.id.as_deref(), Some("GRAF-001"));
        assert_eq!(parsed.alert_type.as_deref(), Some("Alert"));
    }

    #[test]
    fn test_serialized_alert_uses_type_key() {
        let json = serde_json::to_value(Alert::sample()).unwrap();
        assert_eq!(json["type"], "Alert");
        assert!(json.get("alert_type").is_none());
    }
}
