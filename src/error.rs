//! Error types for notepad-collector
//!
//! Every failure carries the operation it came from so the host can show a
//! readable cause, and a coarse [`ErrorKind`] for programmatic handling.

use std::fmt;
use thiserror::Error;

// =============================================================================
// Error Kinds
// =============================================================================

/// Coarse classification of a [`CollectError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed configuration; no request was sent
    Configuration,
    /// Network failure or non-success HTTP status
    Transport,
    /// The service answered with an unexpected body
    DataShape,
    /// Intentional abort: unknown word or duplicate entry
    BusinessRule,
}

/// The remote operation a request belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListLookup,
    DetailFetch,
    Create,
    Update,
    DictionaryCheck,
}

impl Operation {
    /// Human-readable prefix used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Operation::ListLookup => "list lookup failed",
            Operation::DetailFetch => "list detail fetch failed",
            Operation::Create => "list creation failed",
            Operation::Update => "list update failed",
            Operation::DictionaryCheck => "dictionary check failed",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Request Failures
// =============================================================================

/// Why a single API request failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFailure {
    /// Non-2xx response
    #[error("HTTP {0}")]
    Status(u16),

    /// Connection failed, timed out, etc.
    #[error("network error: {0}")]
    Network(String),

    /// Body could not be decoded into the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Body decoded but the named object was absent
    #[error("response is missing `{0}`")]
    Missing(&'static str),
}

/// Error raised by an [`HttpTransport`](crate::http::HttpTransport)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError(err.to_string())
    }
}

impl From<TransportError> for RequestFailure {
    fn from(err: TransportError) -> Self {
        RequestFailure::Network(err.0)
    }
}

// =============================================================================
// Collect Errors
// =============================================================================

/// Failure of one collection run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectError {
    #[error("token/title required: api_token and word_list_title must not be empty")]
    MissingCredentials,

    #[error("invalid token format: api_token must be 64 hexadecimal characters")]
    InvalidToken,

    #[error("word is empty")]
    EmptyWord,

    #[error("{operation}: {cause}")]
    Request {
        operation: Operation,
        cause: RequestFailure,
    },

    #[error("malformed {expected} response")]
    MalformedResponse {
        operation: Operation,
        expected: &'static str,
    },

    #[error("word not found in dictionary: \"{word}\"")]
    NotInDictionary { word: String },

    #[error("word already in list: \"{word}\" is already in \"{title}\"")]
    AlreadyInList { word: String, title: String },
}

impl CollectError {
    /// Wrap a request failure with the operation it belongs to
    pub fn request(operation: Operation, cause: RequestFailure) -> Self {
        CollectError::Request { operation, cause }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CollectError::MissingCredentials
            | CollectError::InvalidToken
            | CollectError::EmptyWord => ErrorKind::Configuration,
            CollectError::Request { cause, .. } => match cause {
                RequestFailure::Status(_) | RequestFailure::Network(_) => ErrorKind::Transport,
                RequestFailure::Decode(_) | RequestFailure::Missing(_) => ErrorKind::DataShape,
            },
            CollectError::MalformedResponse { .. } => ErrorKind::DataShape,
            CollectError::NotInDictionary { .. } | CollectError::AlreadyInList { .. } => {
                ErrorKind::BusinessRule
            }
        }
    }

    /// HTTP status behind this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            CollectError::Request {
                cause: RequestFailure::Status(status),
                ..
            } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for collection runs
pub type Result<T> = std::result::Result<T, CollectError>;
