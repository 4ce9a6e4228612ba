//! Client error types

use http::StatusCode;
use shared::{QueryError, ValidationError};
use thiserror::Error;

/// Client error type
///
/// Transport failures, non-2xx responses and malformed bodies are passed
/// through as they occurred; callers decide how to report them.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be sent or the body could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed filter or pagination input
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// Token storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Status code of a non-2xx response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
