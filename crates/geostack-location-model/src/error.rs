//! Location service error types.
//!
//! Service errors arrive as a JSON document. The error code is carried in the
//! `x-amzn-ErrorType` header or in the body's `__type`/`code` member, and may
//! be namespace-qualified (`com.amazonaws.location#ResourceNotFoundException`)
//! or suffixed with a URL (`ThrottlingException:http://...`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::ValidationExceptionReason;

/// Well-known location service error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum LocationErrorCode {
    /// The caller lacks permission for the operation.
    AccessDeniedException,
    /// The request conflicts with the current resource state.
    ConflictException,
    /// The service failed to process the request.
    InternalServerException,
    /// The requested resource does not exist.
    ResourceNotFoundException,
    /// A service quota would be exceeded.
    ServiceQuotaExceededException,
    /// The request was throttled.
    ThrottlingException,
    /// The input failed validation.
    ValidationException,
    /// A code this client does not model.
    #[default]
    Unknown,
}

impl LocationErrorCode {
    /// Every modeled code, excluding [`Self::Unknown`].
    pub const ALL: &'static [Self] = &[
        Self::AccessDeniedException,
        Self::ConflictException,
        Self::InternalServerException,
        Self::ResourceNotFoundException,
        Self::ServiceQuotaExceededException,
        Self::ThrottlingException,
        Self::ValidationException,
    ];

    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessDeniedException => "AccessDeniedException",
            Self::ConflictException => "ConflictException",
            Self::InternalServerException => "InternalServerException",
            Self::ResourceNotFoundException => "ResourceNotFoundException",
            Self::ServiceQuotaExceededException => "ServiceQuotaExceededException",
            Self::ThrottlingException => "ThrottlingException",
            Self::ValidationException => "ValidationException",
            Self::Unknown => "UnknownError",
        }
    }

    /// Resolve a raw wire code, stripping any namespace or URL decoration.
    #[must_use]
    pub fn from_code(raw: &str) -> Self {
        let code = sanitize_error_code(raw);
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == code)
            .unwrap_or(Self::Unknown)
    }

    /// Best guess for a code when only the HTTP status is known.
    #[must_use]
    pub fn from_status(status: http::StatusCode) -> Self {
        match status.as_u16() {
            400 => Self::ValidationException,
            402 => Self::ServiceQuotaExceededException,
            403 => Self::AccessDeniedException,
            404 => Self::ResourceNotFoundException,
            409 => Self::ConflictException,
            429 => Self::ThrottlingException,
            500..=599 => Self::InternalServerException,
            _ => Self::Unknown,
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::AccessDeniedException => http::StatusCode::FORBIDDEN,
            Self::ConflictException => http::StatusCode::CONFLICT,
            Self::ResourceNotFoundException => http::StatusCode::NOT_FOUND,
            Self::ServiceQuotaExceededException => http::StatusCode::PAYMENT_REQUIRED,
            Self::ThrottlingException => http::StatusCode::TOO_MANY_REQUESTS,
            Self::ValidationException => http::StatusCode::BAD_REQUEST,
            Self::InternalServerException | Self::Unknown => {
                http::StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether a retry of the same request may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ThrottlingException | Self::InternalServerException
        )
    }
}

impl fmt::Display for LocationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strip `namespace#` prefixes and `:suffix` decorations from an error code.
#[must_use]
pub fn sanitize_error_code(raw: &str) -> &str {
    let code = raw.split(':').next().unwrap_or(raw);
    let code = code.rsplit('#').next().unwrap_or(code);
    code.trim()
}

/// One field that failed service-side validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationExceptionField {
    /// Field name.
    #[serde(alias = "Name")]
    pub name: String,
    /// Why the field failed.
    #[serde(alias = "Message")]
    pub message: String,
}

/// A location service error response.
#[derive(Debug)]
pub struct LocationError {
    /// The resolved error code.
    pub code: LocationErrorCode,
    /// The code as it appeared on the wire, sanitized.
    pub raw_code: String,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// Request identifier reported by the service.
    pub request_id: Option<String>,
    /// Validation reason, for `ValidationException`.
    pub reason: Option<ValidationExceptionReason>,
    /// Offending fields, for `ValidationException`.
    pub field_list: Vec<ValidationExceptionField>,
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationError({}): {}", self.raw_code, self.message)
    }
}

impl std::error::Error for LocationError {}

impl LocationError {
    /// Create a new `LocationError` from an error code.
    #[must_use]
    pub fn new(code: LocationErrorCode) -> Self {
        Self::with_message(code, code.as_str())
    }

    /// Create a new `LocationError` with a custom message.
    #[must_use]
    pub fn with_message(code: LocationErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            raw_code: code.as_str().to_owned(),
            message: message.into(),
            code,
            request_id: None,
            reason: None,
            field_list: Vec::new(),
        }
    }

    /// Create an error from a raw wire code, keeping unmodeled codes verbatim.
    #[must_use]
    pub fn from_raw_code(raw: &str, message: impl Into<String>) -> Self {
        let code = LocationErrorCode::from_code(raw);
        let mut err = Self::with_message(code, message);
        err.raw_code = sanitize_error_code(raw).to_owned();
        err
    }

    /// Set the HTTP status code.
    #[must_use]
    pub fn with_status(mut self, status: http::StatusCode) -> Self {
        self.status_code = status;
        self
    }

    /// Set the request id.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the validation reason and offending fields.
    #[must_use]
    pub fn with_validation_details(
        mut self,
        reason: Option<ValidationExceptionReason>,
        field_list: Vec<ValidationExceptionField>,
    ) -> Self {
        self.reason = reason;
        self.field_list = field_list;
        self
    }

    /// Whether a retry of the same request may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.code.is_transient()
    }
}

/// Create a `LocationError` from an error code.
///
/// # Examples
///
/// ```
/// use geostack_location_model::location_error;
/// use geostack_location_model::error::LocationErrorCode;
///
/// let err = location_error!(ValidationException);
/// assert_eq!(err.code, LocationErrorCode::ValidationException);
///
/// let err = location_error!(ResourceNotFoundException, "Tracker not found");
/// assert_eq!(err.message, "Tracker not found");
/// ```
#[macro_export]
macro_rules! location_error {
    ($code:ident) => {
        $crate::error::LocationError::new($crate::error::LocationErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::LocationError::with_message($crate::error::LocationErrorCode::$code, $msg)
    };
}
