use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::validation::{FieldError, ValidationFailure};

/// Structured error body shared by every failure on the fraud endpoints.
///
/// Handlers leave `path` empty; [`stamp_problem_path`] fills it from the request URI on
/// the way out, which also covers responses produced after a handler panicked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldError>>,
}

impl ProblemResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
            message: message.into(),
            path: String::new(),
            field_errors: None,
        }
    }

    pub fn validation(failure: ValidationFailure) -> Self {
        Self {
            field_errors: Some(failure.field_errors),
            ..Self::new(StatusCode::BAD_REQUEST, "Validation failed")
        }
    }

    pub fn malformed() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Malformed JSON request")
    }

    pub fn unsupported_media_type() -> Self {
        Self::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Content-Type must be application/json",
        )
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    pub fn at_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ProblemResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status_code(), Json(&self)).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl From<ValidationFailure> for ProblemResponse {
    fn from(failure: ValidationFailure) -> Self {
        debug!(fields = ?failure.fields().collect::<Vec<_>>(), "transaction rejected");
        Self::validation(failure)
    }
}

impl From<JsonRejection> for ProblemResponse {
    fn from(rejection: JsonRejection) -> Self {
        debug!(%rejection, "unreadable transaction payload");
        match rejection {
            JsonRejection::MissingJsonContentType(_) => Self::unsupported_media_type(),
            _ => Self::malformed(),
        }
    }
}

/// Middleware that records the request path on problem responses that lack one.
pub async fn stamp_problem_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<ProblemResponse>() {
        Some(problem) if problem.path.is_empty() => problem.at_path(path).into_response(),
        Some(problem) => {
            response.extensions_mut().insert(problem);
            response
        }
        None => response,
    }
}

/// Panic handler for `CatchPanicLayer`; the panic payload is logged, never returned.
pub fn render_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    error!(%detail, "request handler panicked");
    ProblemResponse::internal().into_response()
}
