//! Group endpoints

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{create_test_user, spawn_app};

#[tokio::test]
async fn test_list_and_get_groups() {
    let app = spawn_app();
    let cats = app.create_group("cats").await;
    app.create_group("dogs").await;

    let response = app.server.get("/api/v1/groups/").await;
    response.assert_status_ok();
    let groups = response.json::<Vec<serde_json::Value>>();
    let slugs: Vec<_> = groups.iter().map(|g| g["slug"].as_str().unwrap()).collect();
    assert_eq!(slugs, vec!["cats", "dogs"]);

    let response = app.server.get(&format!("/api/v1/groups/{}/", cats.id)).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "id": cats.id,
            "title": "Group cats",
            "slug": "cats",
            "description": "Test group",
        })
    );
}

#[tokio::test]
async fn test_unknown_group_is_404() {
    let app = spawn_app();

    assert_error!(app.server.get("/api/v1/groups/7/").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_groups_are_read_only() {
    let app = spawn_app();
    let leo = create_test_user(&app.server, "leo").await;

    let response = app
        .server
        .post("/api/v1/groups/")
        .authorization_bearer(&leo.access)
        .json(&json!({ "title": "New", "slug": "new" }))
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
