//! Error Types
//!
//! Failures of remote calls and of client-side draft validation.

use serde_json::Value;
use thiserror::Error;

/// Common result type for remote resource calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single request against the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx response
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// 2xx response whose body does not have the expected shape
    #[error("Unexpected response: {0}")]
    Shape(String),

    /// 2xx acknowledgement carrying an `error` field
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Build a `Status` error from a non-2xx response body.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| body_message(&value))
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        ApiError::Status { status, message }
    }

    /// Build a `Shape` error, preferring a `message` the backend put in the body.
    pub fn shape(body: &Value, expected: &str) -> Self {
        match body_message(body) {
            Some(message) => ApiError::Shape(message),
            None => ApiError::Shape(format!("expected {}", expected)),
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Extract user-facing text from an error body.
///
/// Looks at `message`, then `detail`. FastAPI validation failures put a list
/// of `{ "msg": ... }` objects under `detail`; the first one is used.
pub fn body_message(value: &Value) -> Option<String> {
    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };

    if let Some(msg) = value.get("message").and_then(Value::as_str).and_then(non_empty) {
        return Some(msg);
    }
    match value.get("detail")? {
        Value::String(s) => non_empty(s),
        Value::Array(entries) => entries
            .iter()
            .find_map(|e| e.get("msg").and_then(Value::as_str).and_then(non_empty)),
        _ => None,
    }
}

/// Client-side rejection of a draft before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("No items selected")]
    NoItems,

    #[error("No valid items found")]
    NoValidItems,

    #[error("Please upload a valid image file.")]
    NotAnImage,

    #[error("Image exceeds the {max_mb} MB limit.")]
    ImageTooLarge { max_mb: usize },
}
