//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses through an [`ErrorClassifier`](crate::inbound::http::error::ErrorClassifier),
//! so nothing here knows about status codes.

use serde::{Deserialize, Serialize};

/// Semantic classification attached to every [`Error`].
///
/// The kind, not the message text, decides how a failure is surfaced to
/// clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The raw request could not be bound into a typed input.
    Binding,
    /// The request is malformed.
    BadRequest,
    /// A supplied value failed validation.
    NotValid,
    /// The requested feature or value is not supported.
    NotSupported,
    /// The target exists but has not been provisioned yet.
    NotProvisioned,
    /// Authenticated but not permitted to perform this action.
    Forbidden,
    /// The HTTP method is not accepted by the resource.
    MethodNotAllowed,
    /// The requested resource does not exist.
    NotFound,
    /// The referenced user does not exist.
    UserNotFound,
    /// Authentication failed or is missing.
    Unauthorized,
    /// The resource being created already exists.
    AlreadyExists,
    /// The operation has no implementation.
    NotImplemented,
    /// Anything without a more specific classification.
    Unclassified,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Binding,
        Self::BadRequest,
        Self::NotValid,
        Self::NotSupported,
        Self::NotProvisioned,
        Self::Forbidden,
        Self::MethodNotAllowed,
        Self::NotFound,
        Self::UserNotFound,
        Self::Unauthorized,
        Self::AlreadyExists,
        Self::NotImplemented,
        Self::Unclassified,
    ];

    /// Text appended to a subject by [`Error::described`].
    fn suffix(self) -> &'static str {
        match self {
            Self::NotValid => " not valid",
            Self::NotSupported => " not supported",
            Self::NotProvisioned => " not provisioned",
            Self::NotFound => " not found",
            Self::UserNotFound => " user not found",
            Self::AlreadyExists => " already exists",
            Self::NotImplemented => " not implemented",
            Self::Binding
            | Self::BadRequest
            | Self::Forbidden
            | Self::MethodNotAllowed
            | Self::Unauthorized
            | Self::Unclassified => "",
        }
    }
}

/// Domain error payload.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorKind};
///
/// let err = Error::not_found("Pet whiskers");
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.message(), "Pet whiskers not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Create an error carrying `message` verbatim.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create an error whose message is `subject` followed by the kind's
    /// conventional suffix, e.g. `"Pet rex"` becomes `"Pet rex not found"`.
    pub fn described(kind: ErrorKind, subject: impl AsRef<str>) -> Self {
        Self::new(kind, format!("{}{}", subject.as_ref(), kind.suffix()))
    }

    /// Semantic classification of the failure.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Whether the error carries the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Constructor for request binding failures.
    pub fn binding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Binding, message)
    }

    /// Convenience constructor for [`ErrorKind::BadRequest`].
    pub fn bad_request(subject: impl AsRef<str>) -> Self {
        Self::described(ErrorKind::BadRequest, subject)
    }

    /// Convenience constructor for [`ErrorKind::NotValid`].
    pub fn not_valid(subject: impl AsRef<str>) -> Self {
        Self::described(ErrorKind::NotValid, subject)
    }

    /// Convenience constructor for [`ErrorKind::NotSupported`].
    pub fn not_supported(subject: impl AsRef<str>) -> Self {
        Self::described(ErrorKind::NotSupported, subject)
    }

    /// Convenience constructor for [`ErrorKind::NotProvisioned`].
    pub fn not_provisioned(subject: impl AsRef<str>) -> Self {
        Self::described(ErrorKind::NotProvisioned, subject)
    }

    /// Convenience constructor for [`ErrorKind::Forbidden`].
    pub fn forbidden(subject: impl AsRef<str>) -> Self {
        Self::described(ErrorKind::Forbidden, subject)
    }

    /// Convenience constructor for [`ErrorKind::MethodNotAllowed`].
    pub fn method_not_allowed(subject: impl AsRef<str>) -> Self {
        Self::described(ErrorKind::MethodNotAllowed, subject)
    }

    /// Convenience constructor for [`ErrorKind::NotFound`].
    pub fn not_found(subject: impl AsRef<str>) -> Self {
        Self::described(ErrorKind::NotFound, subject)
    }

    /// Convenience constructor for [`ErrorKind::UserNotFound`].
    pub fn user_not_found(subject: impl AsRef<str>) -> Self {
        Self::described(ErrorKind::UserNotFound, subject)
    }

    /// Convenience constructor for [`ErrorKind::Unauthorized`].
    pub fn unauthorized(subject: impl AsRef<str>) -> Self {
        Self::described(ErrorKind::Unauthorized, subject)
    }

    /// Convenience constructor for [`ErrorKind::AlreadyExists`].
    pub fn already_exists(subject: impl AsRef<str>) -> Self {
        Self::described(ErrorKind::AlreadyExists, subject)
    }

    /// Convenience constructor for [`ErrorKind::NotImplemented`].
    pub fn not_implemented(subject: impl AsRef<str>) -> Self {
        Self::described(ErrorKind::NotImplemented, subject)
    }

    /// Convenience constructor for [`ErrorKind::Unclassified`].
    pub fn unclassified(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unclassified, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
