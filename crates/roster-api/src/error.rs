//! Error rendering for the HTTP surface

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_core::core_types::RequestContext;
use roster_core::errors::{ExError, ExErrorKind, RosterError};
use serde::Serialize;

/// HTTP status for an error kind.
///
/// Timeouts are 504; every other upstream failure is 502.
pub fn status_for_kind(kind: ExErrorKind) -> StatusCode {
    if kind == ExErrorKind::Timeout {
        return StatusCode::GATEWAY_TIMEOUT;
    }
    if kind.is_upstream_failure() {
        return StatusCode::BAD_GATEWAY;
    }
    match kind {
        ExErrorKind::NotFound => StatusCode::NOT_FOUND,
        ExErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ExErrorKind::CreateFailed => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
}

/// An [`ExError`] on its way out of a handler
#[derive(Debug)]
pub struct ApiError(ExError);

impl ApiError {
    /// Stamp `error` with the request id from `ctx`
    pub fn new(error: ExError, ctx: &RequestContext) -> Self {
        Self(error.with_request_id(ctx.request_id.clone()))
    }

    /// Rejected create body
    pub fn invalid_body(rejection: JsonRejection, ctx: &RequestContext) -> Self {
        let error = ExError::from(RosterError::InvalidRequest {
            reason: rejection.body_text(),
        })
        .with_op("employee_create");
        Self::new(error, ctx)
    }

    pub fn error(&self) -> &ExError {
        &self.0
    }

    pub fn status(&self) -> StatusCode {
        status_for_kind(self.0.kind())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let err = self.0;

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), err.code = err.code(), "{}", err);
        } else {
            tracing::warn!(status = status.as_u16(), err.code = err.code(), "{}", err);
        }

        let message = if err.message().is_empty() {
            err.to_string()
        } else {
            err.message().to_string()
        };
        let body = ErrorBody {
            code: err.code(),
            message,
            request_id: err.request_id().map(|id| id.to_string()),
        };
        (status, Json(body)).into_response()
    }
}
