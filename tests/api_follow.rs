//! Follow endpoints

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{create_test_user, spawn_app, TestUser};

async fn follow(server: &axum_test::TestServer, user: &TestUser, handle: &str) -> axum_test::TestResponse {
    server
        .post("/api/v1/follow/")
        .authorization_bearer(&user.access)
        .json(&json!({ "following": handle }))
        .await
}

#[tokio::test]
async fn test_follow_scenario() {
    let app = spawn_app();
    let alice = create_test_user(&app.server, "alice").await;
    create_test_user(&app.server, "bob").await;

    let created = follow(&app.server, &alice, "bob").await;
    created.assert_status(StatusCode::CREATED);
    assert_eq!(
        created.json::<serde_json::Value>(),
        json!({ "user": "alice", "following": "bob" })
    );

    let duplicate = follow(&app.server, &alice, "bob").await;
    let body = assert_error!(duplicate, StatusCode::BAD_REQUEST, field = "following");
    assert_eq!(body["error"], "You are already following this user.");

    let self_follow = follow(&app.server, &alice, "alice").await;
    let body = assert_error!(self_follow, StatusCode::BAD_REQUEST, field = "following");
    assert_eq!(body["error"], "You cannot follow yourself.");

    let unknown = follow(&app.server, &alice, "nobody").await;
    let body = assert_error!(unknown, StatusCode::BAD_REQUEST, field = "following");
    assert_eq!(body["error"], "Object with username=nobody does not exist.");

    let listed = app
        .server
        .get("/api/v1/follow/")
        .authorization_bearer(&alice.access)
        .await;
    listed.assert_status_ok();
    assert_eq!(
        listed.json::<serde_json::Value>(),
        json!([{ "user": "alice", "following": "bob" }])
    );
}

#[tokio::test]
async fn test_follow_requires_authentication() {
    let app = spawn_app();
    create_test_user(&app.server, "bob").await;

    let list = app.server.get("/api/v1/follow/").await;
    assert_error!(list, StatusCode::UNAUTHORIZED);

    let create = app
        .server
        .post("/api/v1/follow/")
        .json(&json!({ "following": "bob" }))
        .await;
    assert_error!(create, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_following_field_is_required() {
    let app = spawn_app();
    let alice = create_test_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/v1/follow/")
        .authorization_bearer(&alice.access)
        .json(&json!({}))
        .await;

    let body = assert_error!(response, StatusCode::BAD_REQUEST, field = "following");
    assert_eq!(body["error"], "This field is required.");
}

#[tokio::test]
async fn test_follow_is_directed() {
    let app = spawn_app();
    let alice = create_test_user(&app.server, "alice").await;
    let bob = create_test_user(&app.server, "bob").await;

    follow(&app.server, &alice, "bob").await.assert_status(StatusCode::CREATED);
    follow(&app.server, &bob, "alice").await.assert_status(StatusCode::CREATED);

    let bobs = app
        .server
        .get("/api/v1/follow/")
        .authorization_bearer(&bob.access)
        .await
        .json::<serde_json::Value>();
    assert_eq!(bobs, json!([{ "user": "bob", "following": "alice" }]));
}

#[tokio::test]
async fn test_list_shows_only_own_follows() {
    let app = spawn_app();
    let alice = create_test_user(&app.server, "alice").await;
    let bob = create_test_user(&app.server, "bob").await;
    create_test_user(&app.server, "carol").await;

    follow(&app.server, &alice, "carol").await.assert_status(StatusCode::CREATED);

    let bobs = app
        .server
        .get("/api/v1/follow/")
        .authorization_bearer(&bob.access)
        .await
        .json::<Vec<serde_json::Value>>();
    assert!(bobs.is_empty());
}

#[tokio::test]
async fn test_search_follows() {
    let app = spawn_app();
    let alice = create_test_user(&app.server, "alice").await;
    for name in ["Bobby", "bobcat", "carol"] {
        create_test_user(&app.server, name).await;
        follow(&app.server, &alice, name).await.assert_status(StatusCode::CREATED);
    }

    let found = app
        .server
        .get("/api/v1/follow/")
        .add_query_param("search", "BOB")
        .authorization_bearer(&alice.access)
        .await
        .json::<Vec<serde_json::Value>>();

    let following: Vec<_> = found
        .iter()
        .map(|f| f["following"].as_str().unwrap())
        .collect();
    assert_eq!(following, vec!["Bobby", "bobcat"]);
}

#[tokio::test]
async fn test_malformed_follow_body_is_json_400() {
    let app = spawn_app();
    let alice = create_test_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/api/v1/follow/")
        .authorization_bearer(&alice.access)
        .json(&json!({ "following": 5 }))
        .await;

    let body = assert_error!(response, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("following"));
}

#[tokio::test]
async fn test_search_requires_every_term() {
    let app = spawn_app();
    let alice = create_test_user(&app.server, "alice").await;
    for name in ["bobcat", "bobby", "tomcat"] {
        create_test_user(&app.server, name).await;
        follow(&app.server, &alice, name).await.assert_status(StatusCode::CREATED);
    }

    let found = app
        .server
        .get("/api/v1/follow/")
        .add_query_param("search", "bob, CAT")
        .authorization_bearer(&alice.access)
        .await
        .json::<serde_json::Value>();

    assert_eq!(found, json!([{ "user": "alice", "following": "bobcat" }]));
}
