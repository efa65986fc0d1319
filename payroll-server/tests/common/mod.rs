//! Shared test harness: an in-memory server driven through the real router.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use payroll_server::db::DbService;
use payroll_server::{Config, ServerState, app_router};
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = DbService::in_memory().await.expect("in-memory db");
        let state = ServerState::with_db(test_config(), db);
        Self {
            router: app_router(state),
        }
    }

    /// Create an employee through the API and return its id
    pub async fn create_employee(
        &self,
        full_name: &str,
        job_title: &str,
        country: &str,
        salary: f64,
    ) -> String {
        let (status, body) = send(
            &self.router,
            json_request(
                Method::POST,
                "/employees",
                json!({
                    "fullName": full_name,
                    "jobTitle": job_title,
                    "country": country,
                    "salary": salary,
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
        body["id"].as_str().expect("id must be a string").to_string()
    }
}

fn test_config() -> Config {
    Config {
        http_port: 0,
        database_path: ":memory:".into(),
        log_level: "info".into(),
        environment: "test".into(),
    }
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

/// Drive one request through the router; empty bodies come back as Null
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}
