//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ViolationKind`].
#[derive(ToSchema)]
#[schema(as = ViolationKind)]
pub enum ViolationKindSchema {
    /// A required field is absent.
    #[schema(rename = "missing")]
    Missing,
    /// The value has the wrong type or cannot be parsed.
    #[schema(rename = "type_mismatch")]
    TypeMismatch,
    /// The value breaks a length or range rule.
    #[schema(rename = "constraint_violation")]
    ConstraintViolation,
}

/// OpenAPI schema for [`crate::domain::FieldViolation`].
#[derive(ToSchema)]
#[schema(as = FieldViolation)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FieldViolationSchema {
    /// Path to the offending value, outermost segment first.
    #[schema(example = json!(["body", "age"]))]
    loc: Vec<String>,
    /// Human-readable description.
    #[schema(example = "Input should be greater than or equal to 0")]
    msg: String,
    /// Failure category.
    #[schema(rename = "type")]
    kind: ViolationKindSchema,
}

/// 422 response body listing every violation.
#[derive(ToSchema)]
#[schema(as = ValidationErrorBody)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationErrorSchema {
    /// All field violations found in the request.
    detail: Vec<FieldViolationSchema>,
}

/// Response body carrying a single message.
///
/// Used for not-found and internal errors and for deletion receipts.
#[derive(ToSchema)]
#[schema(as = DetailMessage)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DetailMessageSchema {
    /// Human-readable outcome.
    #[schema(example = "User with id 1 deleted")]
    detail: String,
}

/// OpenAPI schema for [`crate::domain::NewUser`].
#[derive(ToSchema)]
#[schema(as = NewUser)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct NewUserSchema {
    /// First name, at most 50 characters.
    #[schema(max_length = 50, example = "Alice")]
    firstname: String,
    /// Last name, at most 50 characters.
    #[schema(max_length = 50, example = "Smith")]
    lastname: String,
    /// Age in years.
    #[schema(minimum = 0, maximum = 2_147_483_647, example = 28)]
    age: i32,
    /// Calendar date of birth.
    #[schema(value_type = String, format = Date, example = "1995-02-20")]
    date_of_birth: String,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Server-assigned identifier.
    #[schema(minimum = 1, example = 1)]
    id: i32,
    /// First name.
    #[schema(example = "Alice")]
    firstname: String,
    /// Last name.
    #[schema(example = "Smith")]
    lastname: String,
    /// Age in years.
    #[schema(example = 28)]
    age: i32,
    /// Calendar date of birth.
    #[schema(value_type = String, format = Date, example = "1995-02-20")]
    date_of_birth: String,
}
