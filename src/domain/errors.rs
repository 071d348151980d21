//! Errors raised by the section service transport.

use thiserror::Error;

use crate::domain::models::ErrorPayload;

/// Failure of a request to the section service
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The service answered with a non-success status
    #[error("Request rejected ({status}): {body}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Structured body, when it parsed as `{code, message}`
        payload: Option<ErrorPayload>,
        /// Raw response body
        body: String,
    },

    /// Connection could not be established or was interrupted
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Success response whose body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a rejection from a status code and raw body, parsing the
    /// structured payload when the body has one.
    pub fn rejected(status: u16, body: String) -> Self {
        let payload = serde_json::from_str::<ErrorPayload>(&body).ok();
        Self::Rejected {
            status,
            payload,
            body,
        }
    }

    /// Structured payload carried by a rejection.
    pub const fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            Self::Rejected { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    /// Returns true if a later read might succeed without anything changing
    /// on the client side.
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout => true,
            Self::Rejected { status, .. } => *status >= 500 || *status == 429,
            Self::Decode(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_parses_structured_body() {
        let err = ApiError::rejected(
            404,
            r#"{"code":"NOT_FOUND_HOUSE_SECTION","message":"Section does not exist"}"#.to_string(),
        );

        let payload = err.payload().expect("payload should parse");
        assert_eq!(payload.code.as_deref(), Some("NOT_FOUND_HOUSE_SECTION"));
        assert_eq!(payload.message, "Section does not exist");
    }

    #[test]
    fn test_rejected_keeps_unstructured_body() {
        let err = ApiError::rejected(502, "<html>Bad Gateway</html>".to_string());

        assert!(err.payload().is_none());
        assert_eq!(err.to_string(), "Request rejected (502): <html>Bad Gateway</html>");
    }

    #[test]
    fn test_transient_errors() {
        assert!(ApiError::Timeout.is_transient());
        assert!(ApiError::Network("reset".to_string()).is_transient());
        assert!(ApiError::rejected(503, String::new()).is_transient());
        assert!(ApiError::rejected(429, String::new()).is_transient());
    }

    #[test]
    fn test_permanent_errors() {
        assert!(!ApiError::rejected(404, String::new()).is_transient());
        assert!(!ApiError::rejected(400, String::new()).is_transient());
        assert!(!ApiError::Decode("eof".to_string()).is_transient());
    }
}
