mod common;

use axum::http::{Method, StatusCode};
use common::{TestApp, empty_request, get_request, json_request, send};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = TestApp::new().await;
    let (status, body) = send(&app.router, get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let app = TestApp::new().await;

    let (status, created) = send(
        &app.router,
        json_request(
            Method::POST,
            "/employees",
            json!({
                "fullName": "Jane Doe",
                "jobTitle": "Engineer",
                "country": "US",
                "salary": 100000.0,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["fullName"], "Jane Doe");
    assert_eq!(created["jobTitle"], "Engineer");
    assert_eq!(created["country"], "US");
    assert_eq!(created["salary"], 100000.0);

    let id = created["id"].as_str().expect("generated id");
    assert!(Uuid::parse_str(id).is_ok(), "id must be a UUID: {id}");

    let (status, fetched) = send(&app.router, get_request(&format!("/employees/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_issues_distinct_ids() {
    let app = TestApp::new().await;
    let mut ids = Vec::new();
    for n in 0..5 {
        ids.push(
            app.create_employee(&format!("Employee {n}"), "Analyst", "US", 50000.0)
                .await,
        );
    }
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len(), "ids must be pairwise distinct");
}

#[tokio::test]
async fn list_returns_every_row() {
    let app = TestApp::new().await;
    app.create_employee("Jane Doe", "Engineer", "US", 100000.0).await;
    app.create_employee("John Smith", "Designer", "IN", 80000.0).await;
    app.create_employee("Eva Novak", "Engineer", "CZ", 70000.0).await;

    let (status, body) = send(&app.router, get_request("/employees")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn partial_update_touches_only_supplied_fields() {
    let app = TestApp::new().await;
    let id = app.create_employee("Jane Doe", "Engineer", "US", 100000.0).await;

    let (status, updated) = send(
        &app.router,
        json_request(
            Method::PUT,
            &format!("/employees/{id}"),
            json!({ "jobTitle": "Staff Engineer" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["jobTitle"], "Staff Engineer");
    assert_eq!(updated["fullName"], "Jane Doe");
    assert_eq!(updated["country"], "US");
    assert_eq!(updated["salary"], 100000.0);
    assert_eq!(updated["id"], id);
}

#[tokio::test]
async fn empty_patch_is_a_no_op() {
    let app = TestApp::new().await;
    let id = app.create_employee("Jane Doe", "Engineer", "US", 100000.0).await;

    let (_, before) = send(&app.router, get_request(&format!("/employees/{id}"))).await;
    let (status, after) = send(
        &app.router,
        json_request(Method::PUT, &format!("/employees/{id}"), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after, before);
}

#[tokio::test]
async fn update_unknown_id_returns_404() {
    let app = TestApp::new().await;
    let (status, body) = send(
        &app.router,
        json_request(
            Method::PUT,
            &format!("/employees/{}", Uuid::new_v4()),
            json!({ "salary": 1.0 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn update_with_invalid_field_returns_400() {
    let app = TestApp::new().await;
    let id = app.create_employee("Jane Doe", "Engineer", "US", 100000.0).await;

    let (status, body) = send(
        &app.router,
        json_request(
            Method::PUT,
            &format!("/employees/{id}"),
            json!({ "salary": -5.0 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["message"], "Salary must be a positive number");

    // the stored row is untouched
    let (_, fetched) = send(&app.router, get_request(&format!("/employees/{id}"))).await;
    assert_eq!(fetched["salary"], 100000.0);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let app = TestApp::new().await;
    let id = app.create_employee("Jane Doe", "Engineer", "US", 100000.0).await;

    let (status, _) = send(
        &app.router,
        empty_request(Method::DELETE, &format!("/employees/{id}")),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app.router, get_request(&format!("/employees/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // deleting again (or deleting an id that never existed) stays 404, never 500
    let (status, _) = send(
        &app.router,
        empty_request(Method::DELETE, &format!("/employees/{id}")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app.router,
        empty_request(Method::DELETE, &format!("/employees/{}", Uuid::new_v4())),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rejects_bad_payloads() {
    let app = TestApp::new().await;

    // missing fullName
    let (status, body) = send(
        &app.router,
        json_request(
            Method::POST,
            "/employees",
            json!({ "jobTitle": "Engineer", "country": "US", "salary": 100000.0 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");

    // non-numeric salary
    let (status, _) = send(
        &app.router,
        json_request(
            Method::POST,
            "/employees",
            json!({ "fullName": "Jane Doe", "jobTitle": "Engineer", "country": "US", "salary": "lots" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // negative salary
    let (status, body) = send(
        &app.router,
        json_request(
            Method::POST,
            "/employees",
            json!({ "fullName": "Jane Doe", "jobTitle": "Engineer", "country": "US", "salary": -1.0 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Salary must be a positive number");

    // short job title
    let (status, body) = send(
        &app.router,
        json_request(
            Method::POST,
            "/employees",
            json!({ "fullName": "Jane Doe", "jobTitle": "X", "country": "US", "salary": 100000.0 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Job title must be at least 2 characters long");

    // country code not exactly 2 chars
    let (status, body) = send(
        &app.router,
        json_request(
            Method::POST,
            "/employees",
            json!({ "fullName": "Jane Doe", "jobTitle": "Engineer", "country": "USA", "salary": 100000.0 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Country must be a 2-character ISO code");

    // nothing was persisted
    let (_, all) = send(&app.router, get_request("/employees")).await;
    assert_eq!(all.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn malformed_id_is_400_not_404() {
    let app = TestApp::new().await;

    let (status, body) = send(&app.router, get_request("/employees/not-a-uuid")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid employee ID format");

    let (status, _) = send(
        &app.router,
        json_request(Method::PUT, "/employees/not-a-uuid", json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app.router,
        empty_request(Method::DELETE, "/employees/not-a-uuid"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
