/*
[INPUT]:  Error sources (HTTP, Graph API, serialization, pagination)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::types::PageDirection;

/// Main error type for the wall-stream adapter
#[derive(Error, Debug)]
pub enum WallStreamError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Graph API returned an error response
    #[error("Graph API error (code {code}, {error_type}): {message}")]
    Api {
        code: i32,
        error_type: String,
        message: String,
    },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Navigation requested before any wall page was fetched
    #[error("no wall page fetched yet, call fetch_wall first")]
    NoPriorFetch,

    /// The last page carries no cursor in the requested direction
    #[error("no {direction} page available from the last fetch")]
    CursorExhausted { direction: PageDirection },
}

// Error envelope the Graph API wraps failures in:
// {"error": {"message": "...", "type": "OAuthException", "code": 190}}
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(rename = "type", default)]
    error_type: String,
    #[serde(default)]
    code: i32,
}

impl WallStreamError {
    /// Check if the error came from the request/response exchange
    pub fn is_request_error(&self) -> bool {
        matches!(self, WallStreamError::Http(_) | WallStreamError::Api { .. })
    }

    /// Check if the error is a navigation precondition violation
    pub fn is_precondition(&self) -> bool {
        matches!(self, WallStreamError::NoPriorFetch)
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        WallStreamError::Api {
            code: i32::from(status.as_u16()),
            error_type: "HttpError".to_string(),
            message: message.into(),
        }
    }

    /// Map a non-2xx Graph response body to an API error.
    ///
    /// Falls back to the raw body when it is not the documented envelope.
    pub(crate) fn from_error_body(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => WallStreamError::Api {
                code: envelope.error.code,
                error_type: envelope.error.error_type,
                message: envelope.error.message,
            },
            Err(_) => Self::api_error(status, body.trim()),
        }
    }
}

/// Result type alias for wall-stream operations
pub type Result<T> = std::result::Result<T, WallStreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let api_err = WallStreamError::api_error(StatusCode::BAD_REQUEST, "bad field");
        assert!(api_err.is_request_error());
        assert!(!api_err.is_precondition());

        let precondition = WallStreamError::NoPriorFetch;
        assert!(!precondition.is_request_error());
        assert!(precondition.is_precondition());

        let exhausted = WallStreamError::CursorExhausted {
            direction: PageDirection::Previous,
        };
        assert!(!exhausted.is_request_error());
        assert_eq!(
            exhausted.to_string(),
            "no previous page available from the last fetch"
        );
    }

    #[test]
    fn test_graph_envelope_parsing() {
        let body = r#"{"error": {"message": "Invalid OAuth access token.", "type": "OAuthException", "code": 190}}"#;
        let err = WallStreamError::from_error_body(StatusCode::UNAUTHORIZED, body);
        match err {
            WallStreamError::Api {
                code,
                error_type,
                message,
            } => {
                assert_eq!(code, 190);
                assert_eq!(error_type, "OAuthException");
                assert_eq!(message, "Invalid OAuth access token.");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_non_envelope_body_falls_back_to_status() {
        let err = WallStreamError::from_error_body(StatusCode::BAD_GATEWAY, "upstream down\n");
        match err {
            WallStreamError::Api {
                code,
                error_type,
                message,
            } => {
                assert_eq!(code, 502);
                assert_eq!(error_type, "HttpError");
                assert_eq!(message, "upstream down");
            }
            _ => panic!("Expected Api error variant"),
        }
    }
}
