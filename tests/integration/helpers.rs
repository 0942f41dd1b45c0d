//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use roster_core::config::{AppConfig, DatabaseConfig};
use roster_database::EmployeeStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The store behind the router, for direct assertions
    pub store: EmployeeStore,
}

impl TestApp {
    /// Create a new test application backed by an empty in-memory store
    pub fn new() -> Self {
        let config = AppConfig {
            database: DatabaseConfig::memory(),
            ..AppConfig::default()
        };

        let store = EmployeeStore::in_memory();
        let state = roster_api::build_state(config, &store);
        let router = roster_api::build_app(state);

        Self { router, store }
    }

    /// Create an employee through the API and return its id
    pub async fn create_employee(&self, first_name: &str, last_name: &str, email: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/employees",
                Some(serde_json::json!({
                    "firstName": first_name,
                    "lastName": last_name,
                    "email": email,
                })),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["id"].as_i64().expect("created employee has an id")
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            raw: body_bytes.to_vec(),
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty or not JSON)
    pub body: Value,
    /// Raw body bytes
    pub raw: Vec<u8>,
}
