//! Comment endpoints nested under posts

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{create_test_post, create_test_user, spawn_app, TestUser};

async fn comment(server: &axum_test::TestServer, user: &TestUser, post_id: i64, text: &str) -> i64 {
    let response = server
        .post(&format!("/api/v1/posts/{}/comments/", post_id))
        .authorization_bearer(&user.access)
        .json(&json!({ "text": text }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_and_list_comments() {
    let app = spawn_app();
    let leo = create_test_user(&app.server, "leo").await;
    let mia = create_test_user(&app.server, "mia").await;
    let post_id = create_test_post(&app.server, &leo, "post").await;

    comment(&app.server, &mia, post_id, "nice").await;
    comment(&app.server, &leo, post_id, "thanks").await;

    let response = app
        .server
        .get(&format!("/api/v1/posts/{}/comments/", post_id))
        .await;
    response.assert_status_ok();
    let comments = response.json::<Vec<serde_json::Value>>();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["author"], "mia");
    assert_eq!(comments[0]["text"], "nice");
    assert_eq!(comments[0]["post"], post_id);
    assert!(comments[0]["created"].is_string());
    assert_eq!(comments[1]["author"], "leo");
}

#[tokio::test]
async fn test_list_comments_of_unknown_post_is_empty() {
    let app = spawn_app();

    let response = app.server.get("/api/v1/posts/999/comments/").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<serde_json::Value>>().len(), 0);
}

#[tokio::test]
async fn test_create_comment_errors() {
    let app = spawn_app();
    let leo = create_test_user(&app.server, "leo").await;
    let post_id = create_test_post(&app.server, &leo, "post").await;
    let path = format!("/api/v1/posts/{}/comments/", post_id);

    let anonymous = app.server.post(&path).json(&json!({ "text": "hi" })).await;
    assert_error!(anonymous, StatusCode::UNAUTHORIZED);

    let blank = app
        .server
        .post(&path)
        .authorization_bearer(&leo.access)
        .json(&json!({ "text": "" }))
        .await;
    assert_error!(blank, StatusCode::BAD_REQUEST, field = "text");

    let unknown_post = app
        .server
        .post("/api/v1/posts/999/comments/")
        .authorization_bearer(&leo.access)
        .json(&json!({ "text": "hi" }))
        .await;
    assert_error!(unknown_post, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comment_belongs_to_its_post() {
    let app = spawn_app();
    let leo = create_test_user(&app.server, "leo").await;
    let first = create_test_post(&app.server, &leo, "first").await;
    let second = create_test_post(&app.server, &leo, "second").await;
    let id = comment(&app.server, &leo, first, "on first").await;

    app.server
        .get(&format!("/api/v1/posts/{}/comments/{}/", first, id))
        .await
        .assert_status_ok();

    let wrong_post = app
        .server
        .get(&format!("/api/v1/posts/{}/comments/{}/", second, id))
        .await;
    assert_error!(wrong_post, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_comment_permissions() {
    let app = spawn_app();
    let leo = create_test_user(&app.server, "leo").await;
    let mia = create_test_user(&app.server, "mia").await;
    let post_id = create_test_post(&app.server, &leo, "post").await;
    let id = comment(&app.server, &mia, post_id, "mine").await;
    let path = format!("/api/v1/posts/{}/comments/{}/", post_id, id);

    // The post's author does not own the comment
    let post_author = app
        .server
        .put(&path)
        .authorization_bearer(&leo.access)
        .json(&json!({ "text": "changed" }))
        .await;
    assert_error!(post_author, StatusCode::FORBIDDEN);

    let comment_author = app
        .server
        .patch(&path)
        .authorization_bearer(&mia.access)
        .json(&json!({ "text": "edited" }))
        .await;
    comment_author.assert_status_ok();
    assert_eq!(comment_author.json::<serde_json::Value>()["text"], "edited");
}

#[tokio::test]
async fn test_patch_comment_without_text_keeps_it() {
    let app = spawn_app();
    let leo = create_test_user(&app.server, "leo").await;
    let post_id = create_test_post(&app.server, &leo, "post").await;
    let id = comment(&app.server, &leo, post_id, "unchanged").await;

    let response = app
        .server
        .patch(&format!("/api/v1/posts/{}/comments/{}/", post_id, id))
        .authorization_bearer(&leo.access)
        .json(&json!({}))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["text"], "unchanged");
}

#[tokio::test]
async fn test_delete_comment() {
    let app = spawn_app();
    let leo = create_test_user(&app.server, "leo").await;
    let post_id = create_test_post(&app.server, &leo, "post").await;
    let id = comment(&app.server, &leo, post_id, "bye").await;
    let path = format!("/api/v1/posts/{}/comments/{}/", post_id, id);

    app.server
        .delete(&path)
        .authorization_bearer(&leo.access)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_error!(app.server.get(&path).await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_post_removes_its_comments() {
    let app = spawn_app();
    let leo = create_test_user(&app.server, "leo").await;
    let post_id = create_test_post(&app.server, &leo, "post").await;
    comment(&app.server, &leo, post_id, "soon gone").await;

    app.server
        .delete(&format!("/api/v1/posts/{}/", post_id))
        .authorization_bearer(&leo.access)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let comments = app
        .server
        .get(&format!("/api/v1/posts/{}/comments/", post_id))
        .await
        .json::<Vec<serde_json::Value>>();
    assert!(comments.is_empty());
}
