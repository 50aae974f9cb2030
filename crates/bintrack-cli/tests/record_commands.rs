//! Mutations: every command validates locally, then writes and reloads.

use bintrack_testing::{TestWorld, fixtures, server};
use wiremock::MockServer;

async fn requests(server: &MockServer, method: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.method.as_str() == method)
        .count()
}

async fn world() -> TestWorld {
    let world = TestWorld::start().await;
    server::mount_records(world.server(), &fixtures::records()).await;
    server::mount_bins(world.server(), &fixtures::bins()).await;
    server::mount_products(world.server(), &fixtures::products()).await;
    world
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_success_reports_server_message() {
    let world = world().await;
    server::mount_mutation(world.server(), "POST", "Record created successfully").await;

    let result = world
        .run(&[
            "add", "--bin-id", "12", "--upc", "0001", "--cases", "3",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Record created successfully"));
    assert!(result.stdout().contains("Inventory reloaded: 3 record(s)."));
    assert_eq!(requests(world.server(), "POST").await, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_without_cases_is_rejected_locally() {
    let world = world().await;
    server::mount_mutation(world.server(), "POST", "Record created successfully").await;

    let result = world
        .run(&["add", "--bin-id", "12", "--upc", "0001"])
        .unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Please enter case quantity"));
    assert_eq!(requests(world.server(), "POST").await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_adjust_negative_delta() {
    let world = world().await;
    server::mount_mutation(world.server(), "PATCH", "Quantity adjusted by -2 cases").await;

    let result = world
        .run(&["adjust", "2", "--by", "-2", "--notes", "damaged"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Quantity adjusted by -2 cases"));
    assert!(result.stdout().contains("Record 2 adjusted."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_adjust_zero_sends_nothing() {
    let world = world().await;

    let result = world.run(&["adjust", "2", "--by", "0"]).unwrap();
    assert!(!result.success());
    assert!(
        result
            .stderr()
            .contains("Please enter a valid adjustment amount")
    );
    assert_eq!(requests(world.server(), "PATCH").await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_without_yes_only_confirms() {
    let world = world().await;

    let result = world.run(&["delete", "3"]).unwrap();
    assert!(result.success());

    let out = result.stdout();
    assert!(out.contains("Are you sure you want to delete this record?"));
    assert!(out.contains("Bin Location: COLD-1"));
    assert!(out.contains("Quantity: 1 cases"));
    assert!(out.contains("bintrack delete 3 --yes"));
    assert_eq!(requests(world.server(), "DELETE").await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_with_yes() {
    let world = world().await;
    server::mount_mutation(world.server(), "DELETE", "Record deleted successfully").await;

    let result = world.run(&["delete", "3", "--yes"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Record deleted successfully"));
    assert_eq!(requests(world.server(), "DELETE").await, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_record_fails_before_writing() {
    let world = world().await;

    let result = world.run(&["delete", "42", "--yes"]).unwrap();
    assert!(!result.success());
    assert_eq!(requests(world.server(), "DELETE").await, 0);
}
