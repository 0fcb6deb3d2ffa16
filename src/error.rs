//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Remote operation failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}

/// Rejection from a remote collaborator (e.g. the purchase backend).
///
/// `message` is human-readable and is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteError {
    pub message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<HttpError> for RemoteError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::BadRequest(body) | HttpError::NotFound(body) => {
                RemoteError::new(message_from_body(&body).unwrap_or(body))
            }
            HttpError::ServerError { body, .. } => {
                RemoteError::new(message_from_body(&body).unwrap_or(body))
            }
            other => RemoteError::new(other.to_string()),
        }
    }
}

/// Extracts the `message` field from a JSON error body, if present.
pub fn message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_displays_message_verbatim() {
        let err = RemoteError::new("Insufficient funds");
        assert_eq!(err.to_string(), "Insufficient funds");
    }

    #[test]
    fn test_remote_error_from_bad_request_extracts_message() {
        let err: RemoteError =
            HttpError::BadRequest(r#"{"message":"Not enough balance"}"#.to_string()).into();
        assert_eq!(err.message, "Not enough balance");
    }

    #[test]
    fn test_remote_error_from_plain_body_keeps_body() {
        let err: RemoteError = HttpError::BadRequest("bad input".to_string()).into();
        assert_eq!(err.message, "bad input");
    }

    #[test]
    fn test_sdk_error_wraps_remote() {
        let err: SdkError = RemoteError::new("nope").into();
        assert_eq!(err.to_string(), "Remote operation failed: nope");
    }
}
