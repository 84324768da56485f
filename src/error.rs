//! Error types for the depth chart core

use thiserror::Error;

/// Depth chart core errors
#[derive(Error, Debug)]
pub enum DepthError {
    #[error("REST API error: {0}")]
    RestApiError(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Request timed out after {0} seconds")]
    FetchTimeout(u64),
}

impl From<serde_json::Error> for DepthError {
    fn from(err: serde_json::Error) -> Self {
        DepthError::ParseError(err.to_string())
    }
}

impl From<reqwest::Error> for DepthError {
    fn from(err: reqwest::Error) -> Self {
        DepthError::RestApiError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DepthError>;
