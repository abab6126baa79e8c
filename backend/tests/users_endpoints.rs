//! End-to-end HTTP tests for the user endpoints.
//!
//! The app is assembled the way the server assembles it, with the in-memory
//! repository from the `test-support` feature standing in for PostgreSQL.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use mobility_api::domain::TRACE_ID_HEADER;
use mobility_api::inbound::http::health::{HealthState, live, ready};
use mobility_api::inbound::http::state::HttpState;
use mobility_api::inbound::http::users::{self, not_found};
use mobility_api::test_support::InMemoryUserRepository;
use mobility_api::{Trace, TraceId};
use rstest::rstest;
use serde_json::{Value, json};

async fn app_with(
    repository: InMemoryUserRepository,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    test::init_service(
        App::new()
            .app_data(health)
            .app_data(web::Data::new(HttpState::from_repository(Arc::new(
                repository,
            ))))
            .wrap(Trace)
            .configure(users::configure)
            .service(ready)
            .service(live)
            .default_service(web::to(not_found)),
    )
    .await
}

struct Reply {
    status: StatusCode,
    trace_id: Option<TraceId>,
    body: Value,
}

async fn send(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    req: test::TestRequest,
) -> Reply {
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status();
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok());
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    Reply {
        status,
        trace_id,
        body,
    }
}

fn user_payload(firstname: &str, age: i64) -> Value {
    json!({
        "firstname": firstname,
        "lastname": "Smith",
        "age": age,
        "date_of_birth": "1995-02-20",
    })
}

#[actix_web::test]
async fn user_lifecycle_round_trips_through_http() {
    let app = app_with(InMemoryUserRepository::new()).await;

    let alice = send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(user_payload("Alice", 28)),
    )
    .await;
    assert_eq!(alice.status, StatusCode::CREATED);
    let bob = send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(user_payload("Bob", 40)),
    )
    .await;
    assert_eq!(bob.status, StatusCode::CREATED);
    let alice_id = alice.body["id"].as_i64().expect("alice id");
    let bob_id = bob.body["id"].as_i64().expect("bob id");
    assert_ne!(alice_id, bob_id);

    let listed = send(&app, test::TestRequest::get().uri("/users")).await;
    assert_eq!(listed.status, StatusCode::OK);
    let records = listed.body.as_array().expect("array body");
    assert_eq!(records.len(), 2);
    assert!(records.contains(&alice.body));
    assert!(records.contains(&bob.body));

    let deleted = send(
        &app,
        test::TestRequest::delete().uri(&format!("/users/{alice_id}")),
    )
    .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(
        deleted.body,
        json!({"detail": format!("User with id {alice_id} deleted")})
    );

    let listed = send(&app, test::TestRequest::get().uri("/users")).await;
    assert_eq!(listed.body, json!([bob.body]));

    let again = send(
        &app,
        test::TestRequest::delete().uri(&format!("/users/{alice_id}")),
    )
    .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(
        again.body,
        json!({"detail": format!("User with id {alice_id} not found")})
    );

    let recreated = send(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(user_payload("Alice", 28)),
    )
    .await;
    let recreated_id = recreated.body["id"].as_i64().expect("new id");
    assert!(recreated_id > bob_id, "deleted ids are not reused");
}

#[rstest]
#[case::created(test::TestRequest::post().uri("/users").set_json(user_payload("Alice", 28)), StatusCode::CREATED)]
#[case::listed(test::TestRequest::get().uri("/users"), StatusCode::OK)]
#[case::invalid(test::TestRequest::post().uri("/users").set_json(json!({})), StatusCode::UNPROCESSABLE_ENTITY)]
#[case::missing(test::TestRequest::delete().uri("/users/42"), StatusCode::NOT_FOUND)]
#[case::bad_id(test::TestRequest::delete().uri("/users/abc"), StatusCode::UNPROCESSABLE_ENTITY)]
#[case::unknown_route(test::TestRequest::get().uri("/accounts"), StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn every_response_carries_a_trace_id(
    #[case] req: test::TestRequest,
    #[case] expected: StatusCode,
) {
    let app = app_with(InMemoryUserRepository::new()).await;

    let reply = send(&app, req).await;

    assert_eq!(reply.status, expected);
    assert!(reply.trace_id.is_some(), "trace-id header present and valid");
}

#[actix_web::test]
async fn validation_failures_list_each_field_under_body() {
    let app = app_with(InMemoryUserRepository::new()).await;

    let reply = send(
        &app,
        test::TestRequest::post().uri("/users").set_json(json!({
            "firstname": "x".repeat(51),
            "lastname": "Smith",
            "age": -1,
            "date_of_birth": "not-a-date",
        })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = reply.body["detail"].as_array().expect("violation list");
    let mut locs: Vec<Value> = detail.iter().map(|v| v["loc"].clone()).collect();
    locs.sort_by_key(ToString::to_string);
    assert_eq!(
        locs,
        [
            json!(["body", "age"]),
            json!(["body", "date_of_birth"]),
            json!(["body", "firstname"]),
        ]
    );

    let listed = send(&app, test::TestRequest::get().uri("/users")).await;
    assert_eq!(listed.body, json!([]), "rejected payloads are not stored");
}

#[actix_web::test]
async fn storage_outage_is_reported_as_generic_internal_error() {
    let app = app_with(InMemoryUserRepository::failing(
        "connection refused: postgresql://app:secret@db:5432",
    ))
    .await;

    let reply = send(&app, test::TestRequest::get().uri("/users")).await;

    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.body, json!({"detail": "Internal server error"}));
    assert!(reply.trace_id.is_some());
}

#[actix_web::test]
async fn health_probes_report_ready_and_live() {
    let app = app_with(InMemoryUserRepository::new()).await;

    for uri in ["/health/ready", "/health/live"] {
        let reply = send(&app, test::TestRequest::get().uri(uri)).await;
        assert_eq!(reply.status, StatusCode::OK, "{uri}");
    }
}
