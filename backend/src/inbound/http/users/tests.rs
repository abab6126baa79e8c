//! Tests for the users HTTP handlers.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockUsersCommand, MockUsersQuery};
use crate::test_support::InMemoryUserRepository;

#[fixture]
fn alice() -> Value {
    json!({
        "firstname": "Alice",
        "lastname": "Smith",
        "age": 28,
        "date_of_birth": "1995-02-20",
    })
}

async fn init_app(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure)
            .default_service(web::to(not_found)),
    )
    .await
}

fn in_memory_state() -> HttpState {
    HttpState::from_repository(Arc::new(InMemoryUserRepository::new()))
}

/// State whose ports must never be reached.
fn untouched_state() -> HttpState {
    let mut command = MockUsersCommand::new();
    command.expect_create_user().never();
    command.expect_delete_user().never();
    let mut query = MockUsersQuery::new();
    query.expect_list_users().never();
    HttpState::new(Arc::new(command), Arc::new(query))
}

async fn send(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    req: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let res = actix_test::call_service(app, req.to_request()).await;
    let status = res.status();
    let body = actix_test::read_body(res).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("response body is JSON")
    };
    (status, json)
}

fn post_user(body: &Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post().uri("/users").set_json(body)
}

#[rstest]
#[actix_web::test]
async fn create_returns_stored_record(alice: Value) {
    let app = init_app(in_memory_state()).await;

    let (status, body) = send(&app, post_user(&alice)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().expect("numeric id") >= 1);
    for field in ["firstname", "lastname", "age", "date_of_birth"] {
        assert_eq!(body[field], alice[field], "field {field} echoed");
    }
}

#[rstest]
#[actix_web::test]
async fn create_reports_every_violation_without_storing() {
    let app = init_app(untouched_state()).await;

    let (status, body) = send(
        &app,
        post_user(&json!({"firstname": "Alice", "age": -1, "date_of_birth": "1995-02-20"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_array().expect("violation list");
    assert!(detail.contains(&json!({
        "loc": ["body", "lastname"],
        "msg": "Field required",
        "type": "missing",
    })));
    assert!(detail.contains(&json!({
        "loc": ["body", "age"],
        "msg": "Input should be greater than or equal to 0",
        "type": "constraint_violation",
    })));
}

#[rstest]
#[case::malformed(
    actix_test::TestRequest::post()
        .uri("/users")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"firstname\": ")
)]
#[case::wrong_content_type(
    actix_test::TestRequest::post()
        .uri("/users")
        .insert_header((header::CONTENT_TYPE, "text/plain"))
        .set_payload("firstname=Alice")
)]
#[actix_web::test]
async fn create_rejects_unreadable_body(#[case] req: actix_test::TestRequest) {
    let app = init_app(untouched_state()).await;

    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body"]));
    assert_eq!(body["detail"][0]["type"], "type_mismatch");
}

#[rstest]
#[actix_web::test]
async fn list_returns_created_records(alice: Value) {
    let app = init_app(in_memory_state()).await;
    for _ in 0..3 {
        send(&app, post_user(&alice)).await;
    }

    let (status, body) = send(&app, actix_test::TestRequest::get().uri("/users")).await;

    assert_eq!(status, StatusCode::OK);
    let mut ids: Vec<i64> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|user| user["id"].as_i64().expect("id"))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[rstest]
#[actix_web::test]
async fn list_on_empty_store_is_empty_array() {
    let app = init_app(in_memory_state()).await;

    let (status, body) = send(&app, actix_test::TestRequest::get().uri("/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[rstest]
#[actix_web::test]
async fn delete_removes_record(alice: Value) {
    let app = init_app(in_memory_state()).await;
    let (_, created) = send(&app, post_user(&alice)).await;
    let id = created["id"].as_i64().expect("id");

    let (status, body) = send(
        &app,
        actix_test::TestRequest::delete().uri(&format!("/users/{id}")),
    )
    .await;
    let (_, listed) = send(&app, actix_test::TestRequest::get().uri("/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"detail": format!("User with id {id} deleted")}));
    assert_eq!(listed, json!([]));
}

#[rstest]
#[actix_web::test]
async fn delete_missing_record_is_not_found() {
    let app = init_app(in_memory_state()).await;

    let (status, body) = send(&app, actix_test::TestRequest::delete().uri("/users/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "User with id 999 not found"}));
}

#[rstest]
#[case("abc", "type_mismatch")]
#[case("0", "constraint_violation")]
#[case("-4", "constraint_violation")]
#[actix_web::test]
async fn delete_rejects_invalid_id_before_storage(#[case] raw: &str, #[case] kind: &str) {
    let app = init_app(untouched_state()).await;

    let (status, body) = send(
        &app,
        actix_test::TestRequest::delete().uri(&format!("/users/{raw}")),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["path", "user_id"]));
    assert_eq!(body["detail"][0]["type"], kind);
}

#[rstest]
#[actix_web::test]
async fn storage_failures_are_redacted(alice: Value) {
    let app = init_app(HttpState::from_repository(Arc::new(
        InMemoryUserRepository::failing("connection reset by peer"),
    )))
    .await;

    let (create_status, create_body) = send(&app, post_user(&alice)).await;
    let (list_status, list_body) = send(&app, actix_test::TestRequest::get().uri("/users")).await;

    assert_eq!(create_status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(list_status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(create_body, json!({"detail": "Internal server error"}));
    assert_eq!(list_body, create_body);
}

#[rstest]
#[actix_web::test]
async fn unknown_routes_are_not_found() {
    let app = init_app(untouched_state()).await;

    let (status, body) = send(&app, actix_test::TestRequest::get().uri("/people")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Not Found"}));
}
