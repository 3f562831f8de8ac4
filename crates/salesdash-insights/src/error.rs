use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while producing an insight.
///
/// These never reach callers of the agent directly; they are folded into an
/// [`InsightResult::Failure`](crate::InsightResult::Failure).
#[derive(Debug, Error)]
pub enum InsightError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The hosted API answered with a non-2xx status.
    #[error("API error: {status}")]
    Status { status: StatusCode },

    #[error("brand data not found: {0}")]
    BrandNotFound(String),

    /// A success response whose body did not carry the generated text.
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),

    /// The analysis payload could not be serialized into the prompt.
    #[error("failed to serialize analysis payload: {0}")]
    Payload(#[source] serde_json::Error),
}

/// Coarse classification of a failed insight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Transport,
    BackendStatus,
    Lookup,
    MalformedResponse,
    Payload,
}

impl InsightError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            InsightError::Http(_) => FailureKind::Transport,
            InsightError::Status { .. } => FailureKind::BackendStatus,
            InsightError::BrandNotFound(_) => FailureKind::Lookup,
            InsightError::MalformedResponse(_) => FailureKind::MalformedResponse,
            InsightError::Payload(_) => FailureKind::Payload,
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::BackendStatus => write!(f, "backend_status"),
            FailureKind::Lookup => write!(f, "lookup"),
            FailureKind::MalformedResponse => write!(f, "malformed_response"),
            FailureKind::Payload => write!(f, "payload"),
        }
    }
}
