//! Error types for remote calls

use thiserror::Error;

/// Error raised while invoking a remote call, before any response is classified
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// Transport-level failure (connect, timeout, interrupted body). Retryable.
    #[error("{0}")]
    Io(String),
    /// The received body is not valid JSON for the expected type
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("{0}")]
    Other(String),
}

impl CallError {
    /// Whether the retry policy applies to this error
    pub fn is_transient(&self) -> bool {
        matches!(self, CallError::Io(_))
    }
}

impl From<reqwest::Error> for CallError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CallError::Io(format!("Request timed out: {}", e))
        } else if e.is_connect() {
            CallError::Io(format!("Connection failed: {}", e))
        } else if e.is_request() {
            CallError::Io(format!("Request failed: {}", e))
        } else if e.is_body() || e.is_decode() {
            // JSON is decoded with serde_json, so here the body stream itself broke
            CallError::Io(format!("Reading response body failed: {}", e))
        } else {
            CallError::Other(format!("Request failed: {}", e))
        }
    }
}

impl From<serde_json::Error> for CallError {
    fn from(e: serde_json::Error) -> Self {
        CallError::Decode(e.to_string())
    }
}

/// Terminal failure of a fetch, carried by the single `Err` element a fetch yields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// 2xx response without a body. Never retried.
    #[error("API call successful but empty response body")]
    EmptyBody,
    /// Non-2xx response. Never retried.
    #[error("API call failed with error {status} - {message}")]
    HttpStatus { status: u16, message: String },
    /// Transport failure that outlived the retry policy
    #[error("Exception during network API call: {0}")]
    Io(String),
    /// Any other call error
    #[error("Exception during network API call: {0}")]
    Unclassified(String),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<CallError> for FetchError {
    fn from(e: CallError) -> Self {
        match e {
            CallError::Io(msg) => FetchError::Io(msg),
            other => FetchError::Unclassified(other.to_string()),
        }
    }
}
