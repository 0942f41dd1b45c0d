//! Integration tests for the employee REST API.

mod helpers;

use http::StatusCode;
use serde_json::json;

use roster_core::traits::Repository;

#[tokio::test]
async fn test_create_employee() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/employees",
            Some(json!({
                "firstName": "test",
                "lastName": "user",
                "email": "test@gmail.com",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["firstName"], "test");
    assert_eq!(response.body["lastName"], "user");
    assert_eq!(response.body["email"], "test@gmail.com");
    assert!(response.body["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_create_employee_duplicate_email_conflicts() {
    let app = helpers::TestApp::new();
    app.create_employee("test", "user", "test@gmail.com").await;

    let response = app
        .request(
            "POST",
            "/api/employees",
            Some(json!({
                "firstName": "john",
                "lastName": "doe",
                "email": "test@gmail.com",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
    assert_eq!(response.body["details"]["field"], "email");
    assert_eq!(app.store.repository().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_employee_invalid_body() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/employees",
            Some(json!({
                "firstName": "",
                "lastName": "user",
                "email": "not-an-email",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    let details = response.body["details"].as_object().unwrap();
    assert_eq!(details.len(), 2);
    assert!(details.contains_key("email"));
}

#[tokio::test]
async fn test_create_employee_missing_field_is_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/employees",
            Some(json!({ "firstName": "test" })),
        )
        .await;

    assert!(response.status.is_client_error());
    assert_eq!(app.store.repository().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_employee_blank_names_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/employees",
            Some(json!({
                "firstName": "   ",
                "lastName": "\t",
                "email": "a@b.com",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(response.body["details"].as_object().unwrap().len(), 2);
    assert_eq!(app.store.repository().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_employee_stores_trimmed_email() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/employees",
            Some(json!({
                "firstName": " test ",
                "lastName": "user",
                "email": "  Test@Gmail.com ",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["firstName"], "test");
    assert_eq!(response.body["email"], "Test@Gmail.com");

    let duplicate = app
        .request(
            "POST",
            "/api/employees",
            Some(json!({
                "firstName": "john",
                "lastName": "doe",
                "email": "test@gmail.com",
            })),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_employees() {
    let app = helpers::TestApp::new();
    app.create_employee("test", "user", "test@gmail.com").await;
    app.create_employee("john", "doe", "johndoe@gmail.com").await;

    let response = app.request("GET", "/api/employees", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let employees = response.body.as_array().unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0]["firstName"], "test");
    assert_eq!(employees[1]["firstName"], "john");
}

#[tokio::test]
async fn test_list_employees_empty() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/employees", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_get_employee_by_id() {
    let app = helpers::TestApp::new();
    let id = app.create_employee("test", "user", "test@gmail.com").await;

    let response = app
        .request("GET", &format!("/api/employees/{id}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
    assert_eq!(response.body["firstName"], "test");
    assert_eq!(response.body["lastName"], "user");
    assert_eq!(response.body["email"], "test@gmail.com");
}

#[tokio::test]
async fn test_get_unknown_employee_is_404_with_empty_body() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/employees/1", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.raw.is_empty());
}

#[tokio::test]
async fn test_update_employee() {
    let app = helpers::TestApp::new();
    let id = app.create_employee("test", "user", "test@gmail.com").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/employees/{id}"),
            Some(json!({
                "firstName": "john",
                "lastName": "doe",
                "email": "johndoe@gmail.com",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
    assert_eq!(response.body["firstName"], "john");
    assert_eq!(response.body["lastName"], "doe");
    assert_eq!(response.body["email"], "johndoe@gmail.com");

    let reloaded = app
        .request("GET", &format!("/api/employees/{id}"), None)
        .await;
    assert_eq!(reloaded.body["email"], "johndoe@gmail.com");
}

#[tokio::test]
async fn test_update_employee_keeping_own_email() {
    let app = helpers::TestApp::new();
    let id = app.create_employee("test", "user", "test@gmail.com").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/employees/{id}"),
            Some(json!({
                "firstName": "renamed",
                "lastName": "user",
                "email": "test@gmail.com",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["firstName"], "renamed");
}

#[tokio::test]
async fn test_update_employee_blank_names_rejected() {
    let app = helpers::TestApp::new();
    let id = app.create_employee("test", "user", "test@gmail.com").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/employees/{id}"),
            Some(json!({
                "firstName": "  ",
                "lastName": "user",
                "email": "test@gmail.com",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let stored = app
        .request("GET", &format!("/api/employees/{id}"), None)
        .await;
    assert_eq!(stored.body["firstName"], "test");
}

#[tokio::test]
async fn test_update_unknown_employee_is_404() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/employees/1",
            Some(json!({
                "firstName": "john",
                "lastName": "doe",
                "email": "johndoe@gmail.com",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.raw.is_empty());
    assert_eq!(app.store.repository().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_into_another_employees_email_conflicts() {
    let app = helpers::TestApp::new();
    app.create_employee("test", "user", "test@gmail.com").await;
    let id = app.create_employee("john", "doe", "johndoe@gmail.com").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/employees/{id}"),
            Some(json!({
                "firstName": "john",
                "lastName": "doe",
                "email": "TEST@gmail.com",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_employee() {
    let app = helpers::TestApp::new();
    let id = app.create_employee("test", "user", "test@gmail.com").await;

    let response = app
        .request("DELETE", &format!("/api/employees/{id}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.raw.is_empty());
    assert!(
        app.store
            .repository()
            .find_by_id(&id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_delete_unknown_employee_is_ok() {
    let app = helpers::TestApp::new();

    let response = app.request("DELETE", "/api/employees/42", None).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_find_employee_by_name() {
    let app = helpers::TestApp::new();
    let id = app.create_employee("test", "user", "test@gmail.com").await;
    app.create_employee("john", "doe", "johndoe@gmail.com").await;

    let response = app
        .request(
            "GET",
            "/api/employees/search?firstName=test&lastName=user",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);

    let missing = app
        .request(
            "GET",
            "/api/employees/search?firstName=test&lastName=doe",
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_employee_lifecycle() {
    let app = helpers::TestApp::new();

    let created = app
        .request(
            "POST",
            "/api/employees",
            Some(json!({
                "firstName": "test",
                "lastName": "user",
                "email": "test@gmail.com",
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["firstName"], "test");
    assert_eq!(created.body["lastName"], "user");
    assert_eq!(created.body["email"], "test@gmail.com");
    let id = created.body["id"].as_i64().unwrap();

    let listed = app.request("GET", "/api/employees", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);
    assert_eq!(listed.body[0], created.body);

    let deleted = app
        .request("DELETE", &format!("/api/employees/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let fetched = app
        .request("GET", &format!("/api/employees/{id}"), None)
        .await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}
