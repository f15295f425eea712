// ABOUTME: Integration tests for the SQLite data access layer
// ABOUTME: Covers schema idempotence, lifecycle isolation, primitives and referential integrity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use exercise_tracker::database::{ConstraintKind, DatabaseError, SqlParam};
use exercise_tracker::models::{NewExercise, User};
use tempfile::TempDir;

fn running(user_id: i64) -> NewExercise {
    NewExercise {
        user_id,
        description: "running".into(),
        duration: 30,
        date: "2023-01-01".into(),
    }
}

#[tokio::test]
async fn test_schema_creation_is_idempotent() {
    let db = common::create_test_database().await.unwrap();
    db.migrate().await.unwrap();
    db.migrate().await.unwrap();

    let tables: Vec<(String,)> = db
        .fetch_all(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'exercises') ORDER BY name",
            &[],
        )
        .await
        .unwrap();
    assert_eq!(
        tables,
        vec![("exercises".to_owned(),), ("users".to_owned(),)]
    );
}

#[tokio::test]
async fn test_connect_creates_data_directory() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("data");
    let lifecycle = common::file_lifecycle(&nested, "test.db");

    lifecycle.connect().await.unwrap();
    assert!(nested.join("test.db").exists());
    lifecycle.close().await;
}

#[tokio::test]
async fn test_reopening_same_file_keeps_data() {
    let temp = TempDir::new().unwrap();

    let first = common::file_lifecycle(temp.path(), "test.db");
    first.connect().await.unwrap().create_user("alice").await.unwrap();
    first.close().await;

    let second = common::file_lifecycle(temp.path(), "test.db");
    let users = second.connect().await.unwrap().list_users().await.unwrap();
    assert_eq!(
        users,
        vec![User {
            id: 1,
            username: "alice".into()
        }]
    );
    second.close().await;
}

#[tokio::test]
async fn test_close_then_connect_fresh_path_is_empty() {
    let temp = TempDir::new().unwrap();

    let lifecycle = common::file_lifecycle(temp.path(), "first.db");
    lifecycle.connect().await.unwrap().create_user("alice").await.unwrap();
    lifecycle.close().await;

    let fresh = common::file_lifecycle(temp.path(), "second.db");
    let users = fresh.connect().await.unwrap().list_users().await.unwrap();
    assert!(users.is_empty());
    fresh.close().await;
}

#[tokio::test]
async fn test_closed_handle_reports_query_error() {
    let temp = TempDir::new().unwrap();
    let lifecycle = common::file_lifecycle(temp.path(), "test.db");
    let db = lifecycle.connect().await.unwrap();
    lifecycle.close().await;

    let error = db.list_users().await.unwrap_err();
    assert!(matches!(error, DatabaseError::QueryError { .. }));
}

#[tokio::test]
async fn test_user_ids_increase() {
    let db = common::create_test_database().await.unwrap();
    let alice = db.create_user("alice").await.unwrap();
    let bob = db.create_user("bob").await.unwrap();

    assert_eq!(alice.id, 1);
    assert!(bob.id > alice.id);
    assert_eq!(db.get_user(bob.id).await.unwrap(), Some(bob));
    assert_eq!(db.get_user(99).await.unwrap(), None);
}

#[tokio::test]
async fn test_duplicate_username_is_unique_violation() {
    let db = common::create_test_database().await.unwrap();
    db.create_user("alice").await.unwrap();

    let error = db.create_user("alice").await.unwrap_err();
    assert_eq!(error.constraint(), Some(ConstraintKind::Unique));
    assert!(error.message().contains("UNIQUE constraint failed"));
}

#[tokio::test]
async fn test_blank_username_is_check_violation() {
    let db = common::create_test_database().await.unwrap();

    for blank in ["", "   "] {
        let error = db.create_user(blank).await.unwrap_err();
        assert_eq!(error.constraint(), Some(ConstraintKind::Check));
    }
    assert!(db.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_exercise_round_trip() {
    let db = common::create_test_database().await.unwrap();
    let user = db.create_user("alice").await.unwrap();

    let stored = db.add_exercise(&running(user.id)).await.unwrap();
    assert_eq!(stored.id, 1);
    assert_eq!(db.get_exercise(stored.id).await.unwrap(), Some(stored));
}

#[tokio::test]
async fn test_exercise_for_missing_user_is_rejected() {
    let db = common::create_test_database().await.unwrap();

    let error = db.add_exercise(&running(42)).await.unwrap_err();
    assert_eq!(error.constraint(), Some(ConstraintKind::ForeignKey));
}

#[tokio::test]
async fn test_non_positive_duration_is_rejected_by_schema() {
    let db = common::create_test_database().await.unwrap();
    let user = db.create_user("alice").await.unwrap();

    let error = db
        .add_exercise(&NewExercise {
            duration: 0,
            ..running(user.id)
        })
        .await
        .unwrap_err();
    assert_eq!(error.constraint(), Some(ConstraintKind::Check));
}

#[tokio::test]
async fn test_primitives_bind_positional_parameters() {
    let db = common::create_test_database().await.unwrap();

    let id = db
        .execute(
            "INSERT INTO users (username) VALUES (?)",
            &[SqlParam::from("carol")],
        )
        .await
        .unwrap();

    let user: Option<User> = db
        .fetch_one(
            "SELECT id, username FROM users WHERE id = ? AND username = ?",
            &[id.into(), "carol".into()],
        )
        .await
        .unwrap();
    assert_eq!(user.map(|u| u.username), Some("carol".to_owned()));

    let count = db
        .fetch_scalar("SELECT COUNT(*) FROM users", &[])
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_malformed_sql_is_query_error() {
    let db = common::create_test_database().await.unwrap();

    let error = db
        .execute("INSERT INTO nowhere VALUES (?)", &[SqlParam::Integer(1)])
        .await
        .unwrap_err();
    assert!(matches!(error, DatabaseError::QueryError { .. }));
    assert!(error.message().contains("no such table"));
}
