//! Client error types.
//!
//! Every failure surfaced by the client is an [`Error`], and every [`Error`]
//! carries a machine-readable code, a human-readable message and an HTTP
//! status code.

use serde::Deserialize;
use thiserror::Error;

/// Code for identifiers rejected before any request is sent.
pub const VALIDATION_ERROR: &str = "validation_error";

/// Code for transport failures and malformed success bodies.
pub const INTERNAL_SERVER_ERROR: &str = "internal_server_error";

/// Code for builder-time configuration failures.
pub const CONFIGURATION_ERROR: &str = "configuration_error";

/// Code used when the server's error body could not be read.
pub const UNKNOWN_ERROR: &str = "unknown";

/// Message used when the server's error body could not be read.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Client error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A tenant, project or resource identifier was rejected locally.
    #[error("Validation error: {message}")]
    Validation {
        /// What was wrong with the input.
        message: String,
    },

    /// Server returned a non-success response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error code from server.
        code: String,
        /// Error message from server.
        message: String,
    },

    /// Transport failure or unreadable success body.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the underlying failure.
        message: String,
    },

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Error::Internal {
            message: message.into(),
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &str {
        match self {
            Error::Validation { .. } => VALIDATION_ERROR,
            Error::Api { code, .. } => code,
            Error::Internal { .. } => INTERNAL_SERVER_ERROR,
            Error::Config(_) => CONFIGURATION_ERROR,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Error::Validation { message }
            | Error::Api { message, .. }
            | Error::Internal { message }
            | Error::Config(message) => message,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        match self {
            Error::Validation { .. } => 400,
            Error::Api { status, .. } => *status,
            Error::Internal { .. } | Error::Config(_) => 500,
        }
    }

    /// Check if this is a local validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api { status: 401 | 403, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        self.status() >= 500
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::internal(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::internal(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::internal(format!("invalid URL: {}", err))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body returned by the server: `{"error": {"code": ..., "message": ...}}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(default = "unknown_code")]
    pub code: String,
    #[serde(default = "unknown_message")]
    pub message: String,
}

impl Default for ErrorDetail {
    fn default() -> Self {
        Self {
            code: unknown_code(),
            message: unknown_message(),
        }
    }
}

fn unknown_code() -> String {
    UNKNOWN_ERROR.to_string()
}

fn unknown_message() -> String {
    UNKNOWN_ERROR_MESSAGE.to_string()
}

impl ErrorResponse {
    /// Build the normalized error for a non-success response body.
    pub(crate) fn into_error(body: &str, status: u16) -> Error {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .unwrap_or_default();
        Error::Api {
            status,
            code: detail.code,
            message: detail.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_parsed() {
        let err = ErrorResponse::into_error(
            r#"{"error":{"code":"not_found","message":"Agent not found"}}"#,
            404,
        );
        assert_eq!(err.code(), "not_found");
        assert_eq!(err.message(), "Agent not found");
        assert_eq!(err.status(), 404);
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unparsable_error_body_keeps_status() {
        let err = ErrorResponse::into_error("<html>Bad Gateway</html>", 502);
        assert_eq!(
            err,
            Error::Api {
                status: 502,
                code: UNKNOWN_ERROR.into(),
                message: UNKNOWN_ERROR_MESSAGE.into(),
            }
        );
    }

    #[test]
    fn test_missing_error_field_is_unknown() {
        let err = ErrorResponse::into_error(r#"{"detail":"nope"}"#, 409);
        assert_eq!(err.code(), UNKNOWN_ERROR);
        assert_eq!(err.status(), 409);
    }

    #[test]
    fn test_partial_error_detail() {
        let err = ErrorResponse::into_error(r#"{"error":{"code":"conflict"}}"#, 409);
        assert_eq!(err.code(), "conflict");
        assert_eq!(err.message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_fixed_codes_and_statuses() {
        let v = Error::validation("bad tenant");
        assert_eq!((v.code(), v.status()), (VALIDATION_ERROR, 400));
        assert!(v.is_validation());

        let i = Error::internal("connection refused");
        assert_eq!((i.code(), i.status()), (INTERNAL_SERVER_ERROR, 500));
        assert_eq!(i.message(), "connection refused");
        assert!(i.is_server_error());
    }

    #[test]
    fn test_auth_error() {
        let err = ErrorResponse::into_error(r#"{"error":{"code":"unauthorized","message":"no"}}"#, 401);
        assert!(err.is_auth_error());
        assert!(!err.is_server_error());
    }
}
