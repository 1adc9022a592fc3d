//! The uniform server response envelope.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Every backend endpoint wraps its payload in this structure.
///
/// Pipeline callers never see the envelope itself: a `success=true`
/// response yields `data`, a `success=false` response is converted into
/// [`ApiError::Business`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the server accepted the request.
    pub success: bool,
    /// Human-readable message, meaningful mostly on rejection.
    #[serde(default)]
    pub message: String,
    /// Payload; may be `null` on rejection.
    pub data: T,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into its payload or a business error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Business`] carrying the envelope message when
    /// `success` is `false`.
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiError::Business {
                message: if self.message.is_empty() {
                    "request rejected".to_string()
                } else {
                    self.message
                },
            })
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_success_yields_data() {
        let envelope = Envelope {
            success: true,
            message: String::new(),
            data: 42,
        };
        assert_eq!(envelope.into_result().unwrap(), 42);
    }

    #[test]
    fn test_rejection_carries_message() {
        let envelope: Envelope<Option<i64>> = Envelope {
            success: false,
            message: "insufficient stock".to_string(),
            data: None,
        };
        let err = envelope.into_result().unwrap_err();
        assert_eq!(
            err,
            ApiError::Business {
                message: "insufficient stock".to_string()
            }
        );
    }

    #[test]
    fn test_missing_message_defaults() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":false,"data":null}"#).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(
            err,
            ApiError::Business {
                message: "request rejected".to_string()
            }
        );
    }
}
