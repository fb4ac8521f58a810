//! Client-side error type.

use geostack_core::CoreError;
use geostack_location_model::error::{LocationError, LocationErrorCode};
use geostack_location_model::validate::ConstraintViolation;

/// Boxed error produced by an [`HttpTransport`](crate::client::HttpTransport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Every way a location call can fail.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The request could not be built (bad endpoint, empty label, ...).
    #[error("failed to construct request: {0}")]
    Construction(String),

    /// The input violates a schema constraint. Nothing was sent.
    #[error("request validation failed: {0}")]
    Validation(#[from] ConstraintViolation),

    /// The service rejected the whole call.
    #[error(transparent)]
    Service(#[from] LocationError),

    /// The transport failed before a response arrived.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// A success response could not be decoded.
    #[error("failed to decode {status} response: {message}")]
    Response {
        /// HTTP status of the response.
        status: http::StatusCode,
        /// What went wrong.
        message: String,
    },
}

impl From<CoreError> for SdkError {
    fn from(err: CoreError) -> Self {
        Self::Construction(err.to_string())
    }
}

impl SdkError {
    /// The service error, if the service rejected the call.
    #[must_use]
    pub fn as_service_error(&self) -> Option<&LocationError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }

    /// The service error code, if the service rejected the call.
    #[must_use]
    pub fn code(&self) -> Option<LocationErrorCode> {
        self.as_service_error().map(|e| e.code)
    }

    /// Whether a retry of the same request may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Service(err) => err.is_transient(),
            Self::Transport(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_expose_service_code() {
        let err = SdkError::from(LocationError::with_message(
            LocationErrorCode::ThrottlingException,
            "slow down",
        ));
        assert_eq!(err.code(), Some(LocationErrorCode::ThrottlingException));
        assert!(err.is_transient());
    }

    #[test]
    fn test_should_not_retry_construction_error() {
        let err = SdkError::Construction("label TrackerName is empty".to_owned());
        assert!(err.code().is_none());
        assert!(!err.is_transient());
        assert_eq!(
            err.to_string(),
            "failed to construct request: label TrackerName is empty"
        );
    }
}
