//! Domain primitives, ports, and services for user records.
//!
//! Public surface:
//! - [`User`] / [`NewUser`]: stored and creatable user records.
//! - [`FieldViolation`]: one structured validation failure.
//! - [`Error`] / [`ErrorCode`]: domain failure reported to adapters.
//! - [`UsersService`]: implementation of the user driving ports.

pub mod error;
pub mod ports;
mod trace_id;
pub mod user;
mod user_schema;
mod users_service;
mod violation;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    AGE_MAX, AGE_MIN, Age, NAME_MAX_CHARS, NewUser, PersonName, USER_ID_MIN, User, UserId,
    UserValidationError,
};
pub use self::users_service::UsersService;
pub use self::violation::{FieldViolation, ViolationKind};
