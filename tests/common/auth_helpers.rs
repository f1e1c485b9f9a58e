//! Authentication test helpers
//!
//! Users are created through the real signup endpoint, so every helper also
//! exercises signup and token issuing.

use axum_test::TestServer;
use serde_json::json;

pub const TEST_PASSWORD: &str = "test_password_123";

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub password: String,
    pub access: String,
    pub refresh: String,
}

/// Sign up a user and return its tokens
pub async fn create_test_user(server: &TestServer, username: &str) -> TestUser {
    let response = server
        .post("/api/v1/auth/signup/")
        .json(&json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": TEST_PASSWORD,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    TestUser {
        id: body["user"]["id"].as_str().unwrap_or_default().to_string(),
        username: username.to_string(),
        password: TEST_PASSWORD.to_string(),
        access: body["access"].as_str().expect("missing access token").to_string(),
        refresh: body["refresh"].as_str().expect("missing refresh token").to_string(),
    }
}

/// Create a post as `user` and return its id
pub async fn create_test_post(server: &TestServer, user: &TestUser, text: &str) -> i64 {
    let response = server
        .post("/api/v1/posts/")
        .authorization_bearer(&user.access)
        .json(&json!({ "text": text }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"]
        .as_i64()
        .expect("missing post id")
}
