// ABOUTME: Integration tests for the user service layer
// ABOUTME: Verifies caller-facing status codes and messages for user operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use exercise_tracker::errors::ErrorCode;
use exercise_tracker::services::users;

#[tokio::test]
async fn test_list_users_empty_is_not_found() {
    let db = common::create_test_database().await.unwrap();

    let error = users::list_users(&db).await.unwrap_err();
    assert_eq!(error.http_status(), 404);
    assert_eq!(error.message, "No users found.");
}

#[tokio::test]
async fn test_list_users_in_id_order() {
    let db = common::create_test_database().await.unwrap();
    for name in ["carol", "alice", "bob"] {
        users::create_user(&db, Some(name)).await.unwrap();
    }

    let names: Vec<String> = users::list_users(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|user| user.username)
        .collect();
    assert_eq!(names, ["carol", "alice", "bob"]);
}

#[tokio::test]
async fn test_create_user_assigns_first_id() {
    let db = common::create_test_database().await.unwrap();

    let user = users::create_user(&db, Some("alice")).await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let db = common::create_test_database().await.unwrap();
    users::create_user(&db, Some("alice")).await.unwrap();

    let error = users::create_user(&db, Some("alice")).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(error.http_status(), 409);
    assert_eq!(error.message, "Username already exists.");
}

#[tokio::test]
async fn test_empty_username_is_bad_request() {
    let db = common::create_test_database().await.unwrap();

    let error = users::create_user(&db, Some("")).await.unwrap_err();
    assert_eq!(error.http_status(), 400);
    assert_eq!(error.message, "Username cannot be empty.");
}

#[tokio::test]
async fn test_missing_username_never_reaches_storage() {
    let db = common::create_test_database().await.unwrap();

    let error = users::create_user(&db, None).await.unwrap_err();
    assert_eq!(error.http_status(), 400);
    assert_eq!(error.message, "Username is required.");
    assert!(db.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_user_by_id_outcomes() {
    let db = common::create_test_database().await.unwrap();
    let alice = users::create_user(&db, Some("alice")).await.unwrap();

    assert_eq!(users::get_user_by_id(&db, "1").await.unwrap(), alice);

    let missing = users::get_user_by_id(&db, "7").await.unwrap_err();
    assert_eq!(missing.http_status(), 404);
    assert_eq!(missing.message, "User with ID 7 not found.");

    for raw in ["abc", "1.5", "0", "-3", ""] {
        let invalid = users::get_user_by_id(&db, raw).await.unwrap_err();
        assert_eq!(invalid.http_status(), 400, "id {raw:?}");
        assert_eq!(invalid.message, "Invalid user ID provided.");
    }
}

#[tokio::test]
async fn test_storage_failures_hide_their_cause() {
    let db = common::create_test_database().await.unwrap();
    db.close().await;

    let listed = users::list_users(&db).await.unwrap_err();
    assert_eq!(listed.http_status(), 500);
    assert_eq!(listed.message, "Failed to retrieve users.");

    let fetched = users::get_user_by_id(&db, "1").await.unwrap_err();
    assert_eq!(fetched.message, "Failed to retrieve user.");

    let resolved = users::resolve_user(&db, "1").await.unwrap_err();
    assert_eq!(resolved.message, "Internal server error.");

    let created = users::create_user(&db, Some("alice")).await.unwrap_err();
    assert_eq!(created.http_status(), 500);
    assert_eq!(created.message, "Failed to create user.");
    assert!(created.source.is_some());
}
