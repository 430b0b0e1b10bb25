//! Error types for the Jina Reader adapter

use thiserror::Error;

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, JinaError>;

/// Main error type for the adapter
#[derive(Error, Debug)]
pub enum JinaError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid API key")]
    Auth,

    #[error("Access denied")]
    Forbidden,

    #[error("Rate limited by the Jina API")]
    RateLimited,

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Jina API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JinaError {
    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            JinaError::Timeout(_) | JinaError::RateLimited | JinaError::Http(_)
        )
    }

    /// Get error code for MCP protocol
    pub fn code(&self) -> i64 {
        match self {
            JinaError::InvalidInput(_) => -32602,
            JinaError::Auth | JinaError::Forbidden => -32003,
            JinaError::RateLimited => -32004,
            _ => -32000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(JinaError::InvalidInput("x".into()).code(), -32602);
        assert_eq!(JinaError::Auth.code(), -32003);
        assert_eq!(JinaError::Forbidden.code(), -32003);
        assert_eq!(JinaError::RateLimited.code(), -32004);
        assert_eq!(
            JinaError::Api {
                status: 500,
                message: "boom".into()
            }
            .code(),
            -32000
        );
    }

    #[test]
    fn test_retryable() {
        assert!(JinaError::Timeout(30).is_retryable());
        assert!(JinaError::RateLimited.is_retryable());
        assert!(!JinaError::Auth.is_retryable());
        assert!(!JinaError::InvalidInput("x".into()).is_retryable());
    }
}
