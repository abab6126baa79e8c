//! Users API handlers.
//!
//! ```text
//! POST /users {"firstname":"Alice","lastname":"Smith","age":28,"date_of_birth":"1995-02-20"}
//! GET /users
//! DELETE /users/{user_id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::domain::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::{
    DetailMessageSchema, NewUserSchema, UserSchema, ValidationErrorSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{USER_ID, json_config, parse_user_id, validate_new_user};

/// Confirmation returned by `DELETE /users/{user_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionReceipt {
    pub detail: String,
}

/// Register the user routes and JSON body handling on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use mobility_api::inbound::http::users;
///
/// let app = App::new().configure(users::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(create_user)
        .service(list_users)
        .service(delete_user);
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::message("Not Found"))
}

/// Create a user record.
///
/// The body is validated field by field; every violation is reported at once
/// and nothing is stored unless the whole record is valid.
#[utoipa::path(
    post,
    path = "/users",
    request_body = NewUserSchema,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 422, description = "Validation failed", body = ValidationErrorSchema),
        (status = 500, description = "Internal server error", body = DetailMessageSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let new_user = validate_new_user(&payload)?;
    let user = state.users.create_user(new_user).await?;
    info!(user_id = %user.id(), "user created");
    Ok(HttpResponse::Created().json(user))
}

/// List every stored user. Order is unspecified.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = DetailMessageSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}

/// Delete a user by identifier.
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    params(("user_id" = i32, Path, description = "Identifier of the user to delete", minimum = 1)),
    responses(
        (status = 200, description = "User deleted", body = DetailMessageSchema),
        (status = 404, description = "No such user", body = DetailMessageSchema),
        (status = 422, description = "Invalid identifier", body = ValidationErrorSchema),
        (status = 500, description = "Internal server error", body = DetailMessageSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{user_id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletionReceipt>> {
    let id = parse_user_id(&path, USER_ID)?;
    state.users.delete_user(id).await?;
    info!(user_id = %id, "user deleted");
    Ok(web::Json(DeletionReceipt {
        detail: format!("User with id {id} deleted"),
    }))
}

#[cfg(test)]
mod tests;
