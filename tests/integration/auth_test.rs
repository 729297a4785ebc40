//! Integration tests for registration, login, and logout.

use axum::http::StatusCode;
use serde_json::json;

use teamhub_auth::JwtDecoder;
use teamhub_database::{RoleStore, UserStore};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({"username": "alice", "password": "pw123", "role": "Admin"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "User registered successfully.");
    assert!(response.body.get("token").is_none());

    let stored = app.store.find_by_username("alice").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "pw123");
    let admin = app.store.find_by_name("Admin").await.unwrap().unwrap();
    assert_eq!(stored.role_id, admin.id);
}

#[tokio::test]
async fn test_register_invalid_role() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({"username": "bob", "password": "x", "role": "Superuser"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_ROLE");
    assert_eq!(response.body["message"], "Invalid role.");
    assert_eq!(app.store.count_by_username("bob").await.unwrap(), 0);
}

#[tokio::test]
async fn test_register_invalid_role_with_empty_credentials() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({"username": "", "password": "", "role": "Superuser"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_ROLE");
    assert_eq!(response.body["message"], "Invalid role.");
}

#[tokio::test]
async fn test_register_role_name_is_case_sensitive() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({"username": "carol", "password": "pw", "role": "admin"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_ROLE");
}

#[tokio::test]
async fn test_register_missing_field_is_validation_error() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({"username": "dave", "password": "pw"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_duplicate_username_allowed() {
    let app = TestApp::new().await;

    app.register("alice", "first", "Admin").await;
    app.register("alice", "second", "Member").await;

    assert_eq!(app.store.count_by_username("alice").await.unwrap(), 2);

    // The earliest account wins at login.
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "alice", "password": "first"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role"], "Admin");
}

#[tokio::test]
async fn test_login_success_returns_token_and_role() {
    let app = TestApp::new().await;
    app.register("alice", "pw123", "Admin").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "alice", "password": "pw123"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role"], "Admin");

    let token = response.body["token"].as_str().unwrap();
    let claims = JwtDecoder::new(&app.config.auth).decode(token).unwrap();
    let user = app.store.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(claims.role, "Admin");
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;
    app.register("bob", "correct", "Member").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "bob", "password": "wrong"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid password.");
    assert!(response.body.get("token").is_none());
}

#[tokio::test]
async fn test_login_empty_password_is_unauthorized() {
    let app = TestApp::new().await;
    app.register("bob", "correct", "Member").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "bob", "password": ""})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert_eq!(response.body["message"], "Invalid password.");
}

#[tokio::test]
async fn test_login_empty_username_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "", "password": "pw"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "User not found.");
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "ghost", "password": "pw"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
    assert_eq!(response.body["message"], "User not found.");
}

#[tokio::test]
async fn test_logout_acknowledges_without_revoking() {
    let app = TestApp::new().await;
    let token = app.login_as("alice", "pw123", "Admin").await;

    let response = app.request("POST", "/api/auth/logout", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Logout successful.");

    let response = app
        .request("GET", "/api/admin/admin-dashboard", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_welcome_and_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Welcome to the Team Collaboration Platform!");

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
