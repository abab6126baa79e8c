//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`], so domain
//! types stay free of utoipa derives.
//!
//! The generated document backs Swagger UI (debug builds) and is exported
//! via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{
    DetailMessageSchema, FieldViolationSchema, NewUserSchema, UserSchema, ValidationErrorSchema,
    ViolationKindSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mobility users API",
        description = "Create, list and delete user records stored in PostgreSQL."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        NewUserSchema,
        FieldViolationSchema,
        ViolationKindSchema,
        ValidationErrorSchema,
        DetailMessageSchema
    )),
    tags(
        (name = "users", description = "User record operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
