//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper reports failures as [`Error::validation`] so handlers return a
//! 422 with the full violation list before any storage call.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use serde_json::Value;
use tracing::debug;

use crate::domain::{Error, FieldViolation, NewUser, USER_ID_MIN, UserId, UserValidationError};

/// Location prefix for request body fields.
const BODY: &str = "body";
/// Location prefix for path parameters.
const PATH: &str = "path";

const JSON_DECODE_ERROR: &str = "JSON decode error";
const JSON_CONTENT_TYPE_ERROR: &str = "Input should be a valid JSON request body";
const NOT_AN_INTEGER: &str = "Input should be a valid integer, unable to parse string as an integer";

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

/// Path parameter naming the user to delete.
pub(crate) const USER_ID: FieldName = FieldName::new("user_id");

/// JSON extractor configuration reporting body failures as validation errors.
///
/// Malformed JSON, a wrong content type, or an oversized payload yield a
/// single violation located at `["body"]`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting request body");
    let msg = match &err {
        JsonPayloadError::ContentType => JSON_CONTENT_TYPE_ERROR.to_owned(),
        JsonPayloadError::Deserialize(_) => JSON_DECODE_ERROR.to_owned(),
        other => other.to_string(),
    };
    Error::validation(vec![FieldViolation::type_mismatch([BODY], msg)]).into()
}

/// Validate a creatable user payload, prefixing violation locations with
/// `body`.
pub(crate) fn validate_new_user(payload: &Value) -> Result<NewUser, Error> {
    NewUser::from_json(payload).map_err(|violations| {
        Error::validation(
            violations
                .into_iter()
                .map(|violation| violation.with_prefix(BODY))
                .collect(),
        )
    })
}

/// Parse a user identifier from a raw path segment.
pub(crate) fn parse_user_id(raw: &str, field: FieldName) -> Result<UserId, Error> {
    let loc = [PATH, field.as_str()];
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::validation(vec![FieldViolation::type_mismatch(loc, NOT_AN_INTEGER)]))?;
    UserId::new(value).map_err(|err| {
        let violation = match &err {
            UserValidationError::IdOutOfRange => FieldViolation::type_mismatch(loc, err.to_string()),
            _ => FieldViolation::constraint(loc, err.to_string()),
        };
        debug!(min = USER_ID_MIN, value, "rejecting user id");
        Error::validation(vec![violation])
    })
}
