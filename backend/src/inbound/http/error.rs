//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving every
//! handler the same JSON envelope and status policy. The policy lives behind
//! [`ErrorClassifier`] and is handed to router assembly explicitly, so tests
//! and alternative deployments can swap it without touching handlers.

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, body::BoxBody};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorKind};

/// Standard error envelope returned by every failing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Human-readable message.
    #[schema(example = "Pet whiskers not found")]
    pub message: String,
}

impl ApiError {
    /// Wrap a client-facing message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome of classifying a domain error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Status code sent to the client.
    pub status: StatusCode,
    /// Body sent to the client.
    pub body: ApiError,
}

impl Classification {
    /// Render the classification as a JSON response.
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status).json(self.body)
    }
}

/// Policy turning domain failures into client responses.
pub trait ErrorClassifier: Send + Sync {
    /// Decide the status code and body for `error`.
    fn classify(&self, error: &Error) -> Classification;
}

/// Default classification table.
///
/// | kind | status |
/// |---|---|
/// | `Binding`, `BadRequest`, `NotValid`, `NotSupported`, `NotProvisioned` | 400 |
/// | `Unauthorized` | 401 |
/// | `Forbidden` | 403 |
/// | `NotFound`, `UserNotFound` | 404 |
/// | `MethodNotAllowed` | 405 |
/// | `AlreadyExists` | 409 |
/// | `NotImplemented` | 501 |
/// | `Unclassified` | 500, message redacted |
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusTable;

impl StatusTable {
    /// Status code for a kind, or `None` when the kind is unclassified.
    pub fn status_for(kind: ErrorKind) -> Option<StatusCode> {
        let status = match kind {
            ErrorKind::Binding
            | ErrorKind::BadRequest
            | ErrorKind::NotValid
            | ErrorKind::NotSupported
            | ErrorKind::NotProvisioned => StatusCode::BAD_REQUEST,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorKind::NotFound | ErrorKind::UserNotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::AlreadyExists => StatusCode::CONFLICT,
            ErrorKind::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            ErrorKind::Unclassified => return None,
        };
        Some(status)
    }
}

impl ErrorClassifier for StatusTable {
    fn classify(&self, error: &Error) -> Classification {
        match Self::status_for(error.kind()) {
            Some(status) => {
                warn!(kind = ?error.kind(), status = status.as_u16(), error = %error, "request failed");
                Classification {
                    status,
                    body: ApiError::new(error.message()),
                }
            }
            None => {
                // Do not leak implementation details to clients.
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                error!(kind = ?error.kind(), error = %error, "unclassified error");
                Classification {
                    status,
                    body: ApiError::new(status.canonical_reason().unwrap_or("Internal Server Error")),
                }
            }
        }
    }
}

/// Shared handle to the classifier installed by router assembly.
pub type SharedClassifier = Arc<dyn ErrorClassifier>;

/// Handler outcome rendered through the installed classifier.
///
/// Success serialises the value with `200 OK`; failure is classified. A
/// request therefore always yields exactly one of the two.
pub struct Outcome<T> {
    result: Result<T, Error>,
    classifier: SharedClassifier,
}

impl<T> Outcome<T> {
    /// Pair a handler result with the classifier that will render it.
    pub fn new(result: Result<T, Error>, classifier: SharedClassifier) -> Self {
        Self { result, classifier }
    }
}

impl<T: Serialize> Responder for Outcome<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self.result {
            Ok(value) => HttpResponse::Ok().json(value),
            Err(err) => self.classifier.classify(&err).into_response(),
        }
    }
}

/// Render a domain error through `classifier` as an Actix error.
fn binding_failure<E>(classifier: &dyn ErrorClassifier, cause: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = classifier
        .classify(&Error::binding(cause.to_string()))
        .into_response();
    InternalError::from_response(cause, response).into()
}

/// Query extractor configuration raising binding errors via `classifier`.
pub fn query_config(classifier: SharedClassifier) -> actix_web::web::QueryConfig {
    actix_web::web::QueryConfig::default().error_handler(
        move |err: QueryPayloadError, _req: &HttpRequest| binding_failure(classifier.as_ref(), err),
    )
}

/// JSON extractor configuration raising binding errors via `classifier`.
///
/// Bodies are parsed as JSON whatever their `Content-Type`.
pub fn json_config(classifier: SharedClassifier) -> actix_web::web::JsonConfig {
    actix_web::web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(move |err: JsonPayloadError, _req: &HttpRequest| {
            binding_failure(classifier.as_ref(), err)
        })
}
