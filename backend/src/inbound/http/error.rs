//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while turning failures into the
//! `{"detail": ...}` envelope: a message for not-found and internal errors,
//! a list of field violations for validation failures.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{Error, ErrorCode, FieldViolation, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned in place of any internal failure.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// Wire envelope for every error and deletion receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

/// Either a human-readable message or the list of violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Violations(Vec<FieldViolation>),
}

impl ErrorBody {
    /// Envelope carrying a plain message.
    pub fn message(detail: impl Into<String>) -> Self {
        Self {
            detail: ErrorDetail::Message(detail.into()),
        }
    }
}

impl From<&Error> for ErrorBody {
    fn from(error: &Error) -> Self {
        let detail = match error.code() {
            ErrorCode::ValidationFailed => ErrorDetail::Violations(error.violations().to_vec()),
            ErrorCode::InternalError => ErrorDetail::Message(INTERNAL_ERROR_DETAIL.to_owned()),
            _ => ErrorDetail::Message(error.message().to_owned()),
        };
        Self { detail }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(ErrorBody::from(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(INTERNAL_ERROR_DETAIL)
    }
}
