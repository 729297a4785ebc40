//! Integration tests for the role-gated admin dashboard.

use axum::http::{StatusCode, header};
use chrono::Utc;
use uuid::Uuid;

use teamhub_auth::{Claims, JwtEncoder};
use teamhub_core::config::AuthConfig;

use crate::helpers::{TEST_SECRET, TestApp};

const DASHBOARD: &str = "/api/admin/admin-dashboard";

fn signed(secret: &str, role: &str, iat: i64, exp: i64) -> String {
    let encoder = JwtEncoder::new(&AuthConfig {
        jwt_secret: secret.to_string(),
    });
    encoder
        .encode(&Claims {
            sub: Uuid::new_v4(),
            username: "crafted".to_string(),
            role: role.to_string(),
            iat,
            exp,
        })
        .unwrap()
}

#[tokio::test]
async fn test_admin_can_open_dashboard() {
    let app = TestApp::new().await;
    let token = app.login_as("alice", "pw123", "Admin").await;

    let response = app.request("GET", DASHBOARD, None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Welcome to the Admin Dashboard!");
}

#[tokio::test]
async fn test_member_is_forbidden() {
    let app = TestApp::new().await;
    let token = app.login_as("bob", "pw", "Member").await;

    let response = app.request("GET", DASHBOARD, None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
    assert_eq!(response.body["message"], "Access denied.");
}

#[tokio::test]
async fn test_token_without_role_is_forbidden() {
    let app = TestApp::new().await;
    let now = Utc::now().timestamp();
    let token = signed(TEST_SECRET, "", now, now + 600);

    let response = app.request("GET", DASHBOARD, None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], "No role assigned to the user.");
}

#[tokio::test]
async fn test_token_missing_role_claim_is_forbidden() {
    let app = TestApp::new().await;
    let now = Utc::now().timestamp();
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &serde_json::json!({
            "sub": Uuid::new_v4(),
            "username": "norole",
            "iat": now,
            "exp": now + 600,
        }),
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app.request("GET", DASHBOARD, None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
    assert_eq!(response.body["message"], "No role assigned to the user.");
}

#[tokio::test]
async fn test_guarded_response_carries_caller_identity() {
    let app = TestApp::new().await;
    let token = app.login_as("bob", "pw", "Member").await;

    let response = app.request("GET", DASHBOARD, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let ctx = response.context.expect("context attached");
    assert_eq!(ctx.username, "bob");
    assert_eq!(ctx.role, "Member");

    let response = app.request("GET", DASHBOARD, None, None).await;
    assert!(response.context.is_none());
}

#[tokio::test]
async fn test_missing_token_is_unauthenticated() {
    let app = TestApp::new().await;

    let response = app.request("GET", DASHBOARD, None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
    assert_eq!(
        response.headers.get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
}

#[tokio::test]
async fn test_malformed_authorization_header() {
    let app = TestApp::new().await;

    for value in ["Basic dXNlcjpwdw==", "Bearer", "not-a-token"] {
        let response = app.request_with_authorization(DASHBOARD, value).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{value}");
    }
}

#[tokio::test]
async fn test_garbage_token_is_unauthenticated() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", DASHBOARD, None, Some("definitely.not.ajwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_foreign_signature_is_unauthenticated() {
    let app = TestApp::new().await;
    let now = Utc::now().timestamp();
    let token = signed("some-other-secret", "Admin", now, now + 600);

    let response = app.request("GET", DASHBOARD, None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid token signature");
}

#[tokio::test]
async fn test_expired_token_is_unauthenticated() {
    let app = TestApp::new().await;
    let now = Utc::now().timestamp();
    let token = signed(TEST_SECRET, "Admin", now - 7200, now - 3600);

    let response = app.request("GET", DASHBOARD, None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token has expired");
}

#[tokio::test]
async fn test_dashboard_rejects_post() {
    let app = TestApp::new().await;
    let token = app.login_as("alice", "pw123", "Admin").await;

    let response = app.request("POST", DASHBOARD, None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
