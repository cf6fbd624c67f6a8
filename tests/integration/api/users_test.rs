//! Profile API integration tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::*;

#[tokio::test]
async fn test_get_user() {
    let app = TestApp::new();
    let alice = create_test_user(&app, "alice", "a@x.com").await;
    let bob = create_test_user(&app, "bob", "b@x.com").await;

    let response = app
        .send(
            Method::GET,
            &format!("/api/v1/users/{}", alice.id),
            None,
            Some(&bob.token),
        )
        .await;

    assert_status!(response, StatusCode::OK);
    let user = &response.body["user"];
    assert_eq!(user["id"], json!(alice.id));
    assert_eq!(user["username"], "alice");
    assert_eq!(user["email"], "a@x.com");
    assert_eq!(user["bio"], TEST_BIO);
    assert!(user.get("password_hash").is_none());
}

#[tokio::test]
async fn test_get_user_missing_and_malformed() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let missing = app
        .send(
            Method::GET,
            &format!("/api/v1/users/{}", Uuid::new_v4()),
            None,
            Some(&user.token),
        )
        .await;
    assert_error!(missing, StatusCode::NOT_FOUND, "user not found");

    let malformed = app
        .send(Method::GET, "/api/v1/users/not-a-uuid", None, Some(&user.token))
        .await;
    assert_error!(malformed, StatusCode::BAD_REQUEST, "invalid uuid");
}

#[tokio::test]
async fn test_profile_routes_require_token() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let response = app
        .send(Method::GET, &format!("/api/v1/users/{}", user.id), None, None)
        .await;
    assert_error!(response, StatusCode::UNAUTHORIZED, "unauthorized");
}

#[tokio::test]
async fn test_update_own_profile() {
    let app = TestApp::new();
    let alice = create_test_user(&app, "alice", "a@x.com").await;

    let response = app
        .send(
            Method::PUT,
            &format!("/api/v1/users/{}", alice.id),
            Some(json!({
                "username": "alice_m",
                "email": "alice@x.com",
                "bio": "now restores globes",
            })),
            Some(&alice.token),
        )
        .await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["user"]["username"], "alice_m");
    assert_eq!(response.body["user"]["email"], "alice@x.com");

    // The new email logs in with the unchanged password.
    login(&app, "alice@x.com", &alice.password).await;
}

#[tokio::test]
async fn test_update_to_taken_email_conflicts() {
    let app = TestApp::new();
    let alice = create_test_user(&app, "alice", "a@x.com").await;
    create_test_user(&app, "bob", "b@x.com").await;

    let response = app
        .send(
            Method::PUT,
            &format!("/api/v1/users/{}", alice.id),
            Some(json!({
                "username": "alice",
                "email": "b@x.com",
                "bio": "collects old maps",
            })),
            Some(&alice.token),
        )
        .await;

    assert_error!(response, StatusCode::CONFLICT, "email already exists");
}

#[tokio::test]
async fn test_update_validation() {
    let app = TestApp::new();
    let alice = create_test_user(&app, "alice", "a@x.com").await;

    let response = app
        .send(
            Method::PUT,
            &format!("/api/v1/users/{}", alice.id),
            Some(json!({ "username": "alice" })),
            Some(&alice.token),
        )
        .await;

    assert_status!(response, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.get("email").is_some());
    assert!(response.body.get("bio").is_some());
    assert!(response.body.get("username").is_none());
}

#[tokio::test]
async fn test_cannot_modify_another_identity() {
    let app = TestApp::new();
    let alice = create_test_user(&app, "alice", "a@x.com").await;
    let bob = create_test_user(&app, "bob", "b@x.com").await;

    let update = app
        .send(
            Method::PUT,
            &format!("/api/v1/users/{}", alice.id),
            Some(json!({
                "username": "mallory",
                "email": "m@x.com",
                "bio": "not really alice",
            })),
            Some(&bob.token),
        )
        .await;
    assert_error!(update, StatusCode::FORBIDDEN, "forbidden");

    let delete = app
        .send(
            Method::DELETE,
            &format!("/api/v1/users/{}", alice.id),
            None,
            Some(&bob.token),
        )
        .await;
    assert_error!(delete, StatusCode::FORBIDDEN, "forbidden");
    assert_eq!(app.users.len().await, 2);
}

#[tokio::test]
async fn test_delete_own_profile() {
    let app = TestApp::new();
    let alice = create_test_user(&app, "alice", "a@x.com").await;

    let response = app
        .send(
            Method::DELETE,
            &format!("/api/v1/users/{}", alice.id),
            None,
            Some(&alice.token),
        )
        .await;
    assert_status!(response, StatusCode::NO_CONTENT);

    // The token is still valid until expiry, but the identity is gone.
    let lookup = app
        .send(
            Method::GET,
            &format!("/api/v1/users/{}", alice.id),
            None,
            Some(&alice.token),
        )
        .await;
    assert_error!(lookup, StatusCode::NOT_FOUND, "user not found");
}
