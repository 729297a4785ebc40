//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use teamhub_auth::RequestContext;
use teamhub_core::config::AppConfig;
use teamhub_database::MemoryStore;

/// Secret the test server signs tokens with.
pub const TEST_SECRET: &str = "integration-test-secret";

const TEST_CONFIG: &str = r#"
[database]
provider = "memory"

[auth]
jwt_secret = "integration-test-secret"

[logging]
level = "warn"

[[roles.seed]]
name = "Admin"
permissions = ["manage_users", "view_dashboard"]

[[roles.seed]]
name = "Member"
"#;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for direct inspection
    pub store: Arc<MemoryStore>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with the Admin and Member roles seeded
    pub async fn new() -> Self {
        let config = AppConfig::from_toml(TEST_CONFIG).expect("Failed to parse test config");
        let store = Arc::new(MemoryStore::new());

        teamhub_database::seed::ensure_roles(store.as_ref(), &config.roles.seed)
            .await
            .expect("Failed to seed roles");

        let state = teamhub_api::AppState::new(config.clone(), store.clone(), store.clone());
        let router = teamhub_api::build_app(state);

        Self {
            router,
            store,
            config,
        }
    }

    /// Register a user through the API, asserting success
    pub async fn register(&self, username: &str, password: &str, role: &str) {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                    "role": role,
                })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "register failed: {}",
            response.body
        );
    }

    /// Register and log in a user, returning the issued token
    pub async fn login_as(&self, username: &str, password: &str, role: &str) -> String {
        self.register(username, password, role).await;

        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);

        response.body["token"]
            .as_str()
            .expect("login response has no token")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        self.send(req, body).await
    }

    /// Make a request with a raw `Authorization` header value
    pub async fn request_with_authorization(&self, path: &str, authorization: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .header("Authorization", authorization);
        self.send(req, None).await
    }

    async fn send(&self, req: axum::http::request::Builder, body: Option<Value>) -> TestResponse {
        let req = match body {
            Some(b) => req
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&b).expect("Failed to serialize body"),
                )),
            None => req.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let context = response.extensions().get::<RequestContext>().cloned();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
        let text = String::from_utf8_lossy(&body_bytes).into_owned();

        TestResponse {
            status,
            headers,
            body,
            text,
            context,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: axum::http::HeaderMap,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
    /// Raw body text
    pub text: String,
    /// Identity the authentication stage attached, on guarded routes
    pub context: Option<RequestContext>,
}
