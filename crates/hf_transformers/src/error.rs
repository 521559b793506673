//! Error types for inference operations

use std::fmt;
use thiserror::Error;

/// Remote operation an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Classification,
    Generation,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Classification => write!(f, "classification"),
            Operation::Generation => write!(f, "generation"),
        }
    }
}

/// Coarse classification of an [`InferenceError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The server answered with a non-success status
    RequestFailed,
    /// No response was obtained (network failure, cancellation, deadline)
    Transport,
    /// The response body was not valid JSON
    MalformedResponse,
    /// The response was valid JSON without an element at index 0
    EmptyResult,
    /// The call was rejected before any request was sent
    InvalidInput,
}

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("{operation} request failed: API request failed with status {status}: {body}")]
    RequestFailed {
        operation: Operation,
        status: u16,
        body: String,
    },

    #[error("{operation} request failed: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} request failed: request cancelled")]
    Cancelled { operation: Operation },

    #[error("{operation} request failed: deadline exceeded")]
    DeadlineExceeded { operation: Operation },

    #[error("{operation} request failed: invalid JSON response: {body}")]
    MalformedResponse { operation: Operation, body: String },

    #[error("{operation} request failed: no {operation} results in response")]
    EmptyResult { operation: Operation },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to encode request payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl InferenceError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            InferenceError::RequestFailed { .. } => ErrorKind::RequestFailed,
            InferenceError::Transport { .. }
            | InferenceError::Cancelled { .. }
            | InferenceError::DeadlineExceeded { .. }
            | InferenceError::ClientBuild(_) => ErrorKind::Transport,
            InferenceError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            InferenceError::EmptyResult { .. } => ErrorKind::EmptyResult,
            InferenceError::InvalidInput(_) | InferenceError::Encode(_) => ErrorKind::InvalidInput,
        }
    }

    /// Operation the error was raised by, if it came from a request
    pub fn operation(&self) -> Option<Operation> {
        match self {
            InferenceError::RequestFailed { operation, .. }
            | InferenceError::Transport { operation, .. }
            | InferenceError::Cancelled { operation }
            | InferenceError::DeadlineExceeded { operation }
            | InferenceError::MalformedResponse { operation, .. }
            | InferenceError::EmptyResult { operation } => Some(*operation),
            _ => None,
        }
    }

    /// HTTP status carried by a `RequestFailed` error
    pub fn status(&self) -> Option<u16> {
        match self {
            InferenceError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, InferenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message() {
        let err = InferenceError::RequestFailed {
            operation: Operation::Classification,
            status: 503,
            body: r#"{"error": "Model is loading"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("classification request failed"));
        assert!(msg.contains("503"));
        assert!(msg.contains("Model is loading"));
        assert_eq!(err.kind(), ErrorKind::RequestFailed);
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_cancellation_is_transport_kind() {
        let err = InferenceError::Cancelled {
            operation: Operation::Generation,
        };
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.operation(), Some(Operation::Generation));
        assert!(err.to_string().starts_with("generation request failed"));
    }

    #[test]
    fn test_empty_result_names_operation() {
        let err = InferenceError::EmptyResult {
            operation: Operation::Generation,
        };
        assert_eq!(
            err.to_string(),
            "generation request failed: no generation results in response"
        );
    }
}
