//! Error taxonomy for the HTTP pipeline.
//!
//! Every failure that leaves the pipeline is classified into exactly one
//! [`ApiError`] variant carrying a human-readable message and a machine
//! [`code`](ApiError::code). The pipeline never swallows an error and never
//! retries.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Classified failures raised by the HTTP pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server understood the request but rejected it semantically
    /// (envelope `success=false`, e.g. "insufficient stock").
    #[error("{message}")]
    Business {
        /// Message from the response envelope.
        message: String,
    },

    /// HTTP 403.
    #[error("no permission for this resource")]
    Forbidden,

    /// HTTP 404.
    #[error("requested resource does not exist")]
    NotFound,

    /// HTTP 5xx or any otherwise unclassified status.
    #[error("server error (status {status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message when present, a generic one otherwise.
        message: String,
    },

    /// No response reached the client (connection failure or the fixed
    /// per-request timeout elapsed).
    #[error("network failure: {0}")]
    Network(String),

    /// The request could not be constructed (bad base URL, serialization
    /// failure before send).
    #[error("request setup failed: {0}")]
    RequestSetup(String),

    /// A 2xx response carried a body the client could not decode.
    #[error("response decoding failed: {0}")]
    Decode(String),

    /// HTTP 401. The persisted session has already been cleared and the
    /// session-expiry subscriber notified by the time this propagates.
    #[error("session expired, please log in again")]
    SessionExpired,
}

impl ApiError {
    /// Machine code for client-side error handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Business { .. } => "BUSINESS_ERROR",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::Server { .. } => "SERVER_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::RequestSetup(_) => "REQUEST_SETUP_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::SessionExpired => "SESSION_EXPIRED",
        }
    }

    /// Whether the failure happened below the application level (no usable
    /// response, or an unclassified server fault).
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Server { .. })
    }

    /// Classify a transport-level `reqwest` failure.
    ///
    /// Timeouts fall under the network class: the 10-second upper bound is
    /// indistinguishable from the network going away, and no retry happens
    /// either way.
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_builder() {
            Self::RequestSetup(err.to_string())
        } else if err.is_timeout() {
            Self::Network("request timed out".to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        let business = ApiError::Business {
            message: "insufficient stock".to_string(),
        };
        assert_eq!(business.code(), "BUSINESS_ERROR");
        assert_eq!(ApiError::Forbidden.code(), "FORBIDDEN");
        assert_eq!(ApiError::SessionExpired.code(), "SESSION_EXPIRED");
    }

    #[test]
    fn test_business_message_is_display() {
        let err = ApiError::Business {
            message: "insufficient stock".to_string(),
        };
        assert_eq!(err.to_string(), "insufficient stock");
    }

    #[test]
    fn test_transport_classification() {
        assert!(ApiError::Network("down".to_string()).is_transport());
        assert!(
            ApiError::Server {
                status: 502,
                message: "bad gateway".to_string()
            }
            .is_transport()
        );
        assert!(!ApiError::Forbidden.is_transport());
    }
}
