/// Live server tests
/// Runs the real server on an ephemeral port and drives it over HTTP with the
/// API client, the same way the smoke runner talks to a deployed instance.
mod common;

use common::{fixtures, spawn_server};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use user_api_client::ClientError;
use user_api_server::smoke;
use user_core::UserId;

/// Test create, retrieve and compare every field
#[tokio::test]
async fn test_complete_user_lifecycle() {
    let client = spawn_server(true).await;

    let created = client
        .create_user(fixtures::JOHN_NAME, fixtures::JOHN_EMAIL)
        .await
        .unwrap();
    let retrieved = client.get_user(created.id).await.unwrap();

    assert_eq!(created.id, retrieved.id);
    assert_eq!(created.name, retrieved.name);
    assert_eq!(created.email, retrieved.email);
    assert_eq!(created.created_at, retrieved.created_at);
}

/// Test several users can be created and each read back
#[tokio::test]
async fn test_multiple_user_operations() {
    let client = spawn_server(true).await;

    let mut users = Vec::new();
    for i in 0..3 {
        let user = client
            .create_user(&format!("Multi User {i}"), &format!("multi.user{i}@example.com"))
            .await
            .unwrap();
        users.push(user);
    }

    for user in &users {
        let retrieved = client.get_user(user.id).await.unwrap();
        assert_eq!(&retrieved, user);
    }
}

/// Test error responses in the middle of a workflow
#[tokio::test]
async fn test_error_scenarios_in_workflow() {
    let client = spawn_server(true).await;

    let user = client
        .create_user(fixtures::JANE_NAME, fixtures::JANE_EMAIL)
        .await
        .unwrap();

    let duplicate = client
        .create_user(fixtures::JANE_NAME, fixtures::JANE_EMAIL)
        .await
        .unwrap_err();
    assert!(duplicate.is_conflict());
    assert!(duplicate.to_string().to_lowercase().contains("already exists"));

    let missing = client.get_user(UserId::new(9999)).await.unwrap_err();
    assert!(missing.is_not_found());
    assert!(missing.to_string().to_lowercase().contains("not found"));

    // Original user still reachable
    assert_eq!(client.get_user(user.id).await.unwrap().id, user.id);
}

/// Test validation errors come back over the wire
#[tokio::test]
async fn test_invalid_email_over_http() {
    let client = spawn_server(true).await;

    match client.create_user(fixtures::JOHN_NAME, "invalid-email").await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 400);
            assert!(message.to_lowercase().contains("email"));
        }
        other => panic!("Expected 400 Api error, got {other:?}"),
    }
}

/// Test repeated health checks all succeed quickly
#[tokio::test]
async fn test_health_under_repeated_requests() {
    let client = spawn_server(true).await;

    for _ in 0..10 {
        let start = Instant::now();
        let health = client.health().await.unwrap();
        assert!(health.is_healthy());
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}

/// Test reset over HTTP
#[tokio::test]
async fn test_reset_over_http() {
    let client = spawn_server(true).await;
    let user = client
        .create_user(fixtures::JOHN_NAME, fixtures::JOHN_EMAIL)
        .await
        .unwrap();

    let reset = client.reset().await.unwrap();
    assert_eq!(reset.message, "Database reset successfully");

    assert!(client.get_user(user.id).await.unwrap_err().is_not_found());
}

/// Test parallel clients get distinct sequential IDs
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_over_http() {
    const N: u64 = 20;
    let client = spawn_server(true).await;

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .create_user(&format!("Concurrent User {i}"), &format!("concurrent{i}@example.com"))
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let user = handle.await.unwrap().unwrap();
        assert!(ids.insert(user.id));
    }

    let expected: HashSet<UserId> = (1..=N).map(UserId::new).collect();
    assert_eq!(ids, expected);
}

/// Test the smoke runner passes against a healthy server
#[tokio::test]
async fn test_smoke_run_passes() {
    let client = spawn_server(true).await;

    let report = smoke::run(&client, true).await;

    let names: Vec<_> = report.checks.iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "reset",
            "health",
            "create_user",
            "get_user",
            "duplicate_email",
            "missing_user"
        ]
    );
    assert!(report.passed(), "failures: {:?}", report.failures().collect::<Vec<_>>());
}

/// Test smoke reset check fails when the server has reset disabled
#[tokio::test]
async fn test_smoke_run_reset_disabled() {
    let client = spawn_server(false).await;

    let report = smoke::run(&client, true).await;
    assert!(!report.passed());

    let failures: Vec<_> = report.failures().map(|c| c.name).collect();
    assert_eq!(failures, vec!["reset"]);

    // Without asking for a reset the same server passes
    assert!(smoke::run(&client, false).await.passed());
}
