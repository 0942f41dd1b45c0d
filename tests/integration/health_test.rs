//! Integration tests for the health endpoint and unknown routes.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_health_reports_memory_store() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "memory");
    assert_eq!(response.body["store_healthy"], true);
    assert!(response.body["uptime_seconds"].as_i64().unwrap() >= 0);
}

#[tokio::test]
async fn test_non_numeric_id_is_client_error() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/employees/abc", None).await;

    assert!(response.status.is_client_error());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/departments", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
