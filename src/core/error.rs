//! Crate-level error type.
//!
//! Domain modules keep their own focused error enums; this type is the
//! umbrella they convert into at the boundaries where a caller does not care
//! which domain failed.

use thiserror::Error;

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Umbrella error for the ops-bridge server.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_convert() {
        let err: Error = crate::domains::prompts::PromptError::not_found("x").into();
        assert!(matches!(err, Error::Prompt(_)));

        let err: Error = crate::domains::resources::ResourceError::not_found("y").into();
        assert!(err.to_string().contains("y"));
    }
}
