//! Common utilities shared across bridge tools.
//!
//! This module provides the shared outcome type for upstream REST calls and
//! helpers for building tool results.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Outcome of a bridged upstream call.
///
/// Callers and tests branch on the variant rather than on message text.
/// `InvalidInput` renders as the literal `Invalid JSON input` expected by
/// tool clients; the rejected-parse detail stays available on the variant.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The caller-supplied payload was not valid JSON.
    #[error("Invalid JSON input")]
    InvalidInput(String),

    /// The upstream service answered with a non-success status.
    #[error("upstream returned HTTP {status}")]
    Upstream { status: u16, body: String },

    /// The request never produced an HTTP response (connect failure, etc.).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a success result carrying both a text summary and structured data.
pub fn structured_result<T: Serialize>(summary: String, data: T) -> CallToolResult {
    match serde_json::to_value(&data) {
        Ok(structured) => CallToolResult {
            content: vec![Content::text(summary)],
            structured_content: Some(structured),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => {
            warn!("Failed to serialize structured content: {}", e);
            // Fallback to text-only
            CallToolResult::success(vec![Content::text(summary)])
        }
    }
}
