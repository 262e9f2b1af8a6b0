//! Binding errors.
//!
//! This module provides [`BindError`], the terminal error a resolution ends
//! with when it cannot produce a request object. Each variant maps to a
//! distinct HTTP status so the host framework can render it without
//! inspecting messages:
//!
//! | Variant | Status | Code |
//! |---|---|---|
//! | `UnknownType` | 500 | `UNKNOWN_REQUEST_TYPE` |
//! | `NotAuthorized` | 403 | `ACCESS_DENIED` |
//! | `ValidationFailed` | 422 | `VALIDATION_FAILED` |

use crate::ViolationList;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using [`BindError`].
pub type BindResult<T> = Result<T, BindError>;

/// Discriminant of a [`BindError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindErrorKind {
    /// No factory is registered for the requested type.
    UnknownType,
    /// The request object refused the request.
    NotAuthorized,
    /// The request object has constraint violations.
    ValidationFailed,
}

impl BindErrorKind {
    /// Returns the HTTP status code for this kind.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownType => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotAuthorized => StatusCode::FORBIDDEN,
            Self::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Returns the machine-readable error code for this kind.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownType => "UNKNOWN_REQUEST_TYPE",
            Self::NotAuthorized => "ACCESS_DENIED",
            Self::ValidationFailed => "VALIDATION_FAILED",
        }
    }
}

/// Terminal failure of a resolution.
///
/// # Example
///
/// ```
/// use reqbind_core::{BindError, ViolationList};
/// use http::StatusCode;
///
/// let mut violations = ViolationList::new();
/// violations.add("email", "This value is not a valid email address.");
///
/// let err = BindError::validation_failed("app::SignupRequest", violations);
/// assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
/// assert_eq!(err.violations().map(ViolationList::len), Some(1));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// No factory is registered for the requested type.
    ///
    /// A mismatch between handler signatures and locator registrations; the
    /// client did nothing wrong.
    #[error("no request object factory registered for type {type_name}")]
    UnknownType {
        /// Name of the requested type.
        type_name: String,
    },

    /// The request object's authorization check returned `false`.
    #[error("access denied by {type_name}")]
    NotAuthorized {
        /// Name of the request object type.
        type_name: String,
    },

    /// The request object failed constraint validation.
    #[error("{type_name} failed validation with {} violation(s)", .violations.len())]
    ValidationFailed {
        /// Name of the request object type.
        type_name: String,
        /// Every violation, in the order the validator reported them.
        violations: ViolationList,
    },
}

impl BindError {
    /// Creates an unknown type error.
    #[must_use]
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }

    /// Creates an access denied error.
    #[must_use]
    pub fn not_authorized(type_name: impl Into<String>) -> Self {
        Self::NotAuthorized {
            type_name: type_name.into(),
        }
    }

    /// Creates a validation error carrying `violations`.
    #[must_use]
    pub fn validation_failed(type_name: impl Into<String>, violations: ViolationList) -> Self {
        Self::ValidationFailed {
            type_name: type_name.into(),
            violations,
        }
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> BindErrorKind {
        match self {
            Self::UnknownType { .. } => BindErrorKind::UnknownType,
            Self::NotAuthorized { .. } => BindErrorKind::NotAuthorized,
            Self::ValidationFailed { .. } => BindErrorKind::ValidationFailed,
        }
    }

    /// Returns the name of the type the error concerns.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::UnknownType { type_name }
            | Self::NotAuthorized { type_name }
            | Self::ValidationFailed { type_name, .. } => type_name,
        }
    }

    /// Returns the violations of a validation failure.
    #[must_use]
    pub fn violations(&self) -> Option<&ViolationList> {
        match self {
            Self::ValidationFailed { violations, .. } => Some(violations),
            _ => None,
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        self.kind().error_code()
    }

    /// Converts this error to a serializable error envelope.
    ///
    /// The message of an `UnknownType` error is replaced with a generic one;
    /// type names of server-side misconfiguration are not sent to clients.
    #[must_use]
    pub fn to_envelope(&self, request_id: Option<&str>) -> ErrorEnvelope {
        let message = match self {
            Self::UnknownType { .. } => "internal server error".to_string(),
            Self::NotAuthorized { .. } => "access denied".to_string(),
            Self::ValidationFailed { .. } => "the request failed validation".to_string(),
        };

        ErrorEnvelope {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message,
                kind: self.kind(),
                violations: self.violations().cloned(),
            },
            request_id: request_id.map(ToString::to_string),
        }
    }
}

/// Serializable error envelope for HTTP responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// The error details.
    pub error: ErrorDetail,
    /// The request ID for correlation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Error detail within an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code.
    pub code: String,
    /// Client-safe message.
    pub message: String,
    /// Error kind.
    pub kind: BindErrorKind,
    /// Field-level violations of a validation failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<ViolationList>,
}
