use bintrack_testing::{TestWorld, fixtures, server};
use bintrack_types::{HistoryEntry, OperationType, RecordId};
use predicates::prelude::*;

#[tokio::test(flavor = "multi_thread")]
async fn test_health() {
    let world = TestWorld::start().await;
    server::mount_health(world.server()).await;

    let result = world.run(&["health"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("Server is ok"));
    assert!(result.stdout().contains(&world.server_uri()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_config_init_then_show_redacts_cookie() {
    let world = TestWorld::start().await;

    let result = world.run(&["config", "init"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("Config written"));
    assert!(world.config_path().exists());

    let again = world.run(&["config", "init"]).unwrap();
    assert!(again.stdout().contains("Config already exists"));

    let written = std::fs::read_to_string(world.config_path()).unwrap();
    std::fs::write(
        world.config_path(),
        written.replace("[server]\n", "[server]\nsession_cookie = \"session=secret\"\n"),
    )
    .unwrap();

    let shown = world.run(&["config", "show"]).unwrap();
    assert!(shown.success());
    assert!(shown.stdout().contains("<redacted>"));
    assert!(!shown.stdout().contains("session=secret"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bins_filter_locally() {
    let world = TestWorld::start().await;
    server::mount_bins(world.server(), &fixtures::bins()).await;

    let result = world.run(&["bins", "--search", "a-0"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("A-01"));
    assert!(result.stdout().contains("A-02"));
    assert!(!result.stdout().contains("COLD-1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_short_product_query_sends_nothing() {
    let world = TestWorld::start().await;
    server::mount_products(world.server(), &fixtures::products()).await;

    let result = world.run(&["products", "m"]).unwrap();
    assert!(result.success());
    assert!(
        world
            .server()
            .received_requests()
            .await
            .unwrap_or_default()
            .is_empty()
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_history_list() {
    let world = TestWorld::start().await.with_format("json");
    let entry = HistoryEntry {
        history_id: 1,
        record_id: RecordId::new(2),
        operation: OperationType::Adjust,
        timestamp: Some("Tue, 14 Jan 2025 09:30:00 GMT".to_string()),
        username: Some("jdoe".to_string()),
        previous_upc: None,
        previous_description: Some("Orange Juice".to_string()),
        previous_cases: Some(5),
        previous_bin_id: None,
        previous_bin: Some("A-02".to_string()),
        previous_unit_qty: None,
        new_upc: None,
        new_description: Some("Orange Juice".to_string()),
        new_cases: Some(3),
        new_bin_id: None,
        new_bin: Some("A-02".to_string()),
        new_unit_qty: None,
        adjustment: Some(-2),
        notes: Some("damaged".to_string()),
    };
    server::mount_history(world.server(), &[entry]).await;

    let result = world.run(&["history", "list", "--record-id", "2"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    let entries = json["content"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["user"], "jdoe");
    assert_eq!(entries[0]["change"], "-2 cases (5 → 3)");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_no_command_prints_guidance() {
    let world = TestWorld::start().await;

    world
        .command()
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("bintrack config init"));
}
