//! `bintrack list` against a mock inventory server.

use bintrack_testing::fixtures::{self, RecordBuilder};
use bintrack_testing::{TestWorld, server};

#[tokio::test(flavor = "multi_thread")]
async fn test_list_table_with_totals() {
    let world = TestWorld::start().await;
    server::mount_records(world.server(), &fixtures::records()).await;

    let result = world.run(&["list"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let out = result.stdout();
    assert!(out.contains("3 record(s)"));
    assert!(out.contains("Total Cases: 8 | Total Items: 24 | Records: 3"));
    assert!(out.contains("BIN LOCATION"));
    assert!(out.contains("Whole Milk"));
    assert!(out.contains("Not Set"));
    assert!(out.contains("Totals"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_narrows_summary() {
    let world = TestWorld::start().await;
    server::mount_records(world.server(), &fixtures::records()).await;

    let result = world.run(&["list", "--search", "COLD"]).unwrap();
    assert!(result.success());

    let out = result.stdout();
    assert!(out.contains("1 of 3 record(s)"));
    assert!(out.contains("Total Cases: 1 | Total Items: 4 | Records: 1"));
    assert!(out.contains("Butter"));
    assert!(!out.contains("Whole Milk"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_without_matches_hides_summary() {
    let world = TestWorld::start().await;
    server::mount_records(world.server(), &fixtures::records()).await;

    let result = world.run(&["list", "-s", "nothing-like-this"]).unwrap();
    assert!(result.success());

    let out = result.stdout();
    assert!(out.contains("No records match 'nothing-like-this'"));
    assert!(out.contains("No records found"));
    assert!(!out.contains("Total Cases"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_card_view_has_no_totals_row() {
    let world = TestWorld::start().await;
    server::mount_records(world.server(), &fixtures::records()).await;

    let result = world.run(&["list", "--view", "card"]).unwrap();
    assert!(result.success());

    let out = result.stdout();
    assert!(out.contains("[COLD-1] Butter (#3)"));
    assert!(out.contains("  Total Quantity: —"));
    assert!(out.contains("Actions: Edit | Adjust | Delete"));
    assert!(!out.contains("Totals"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_output_is_raw_data() {
    let world = TestWorld::start().await.with_format("json");
    server::mount_records(world.server(), &fixtures::records()).await;

    let result = world.run(&["list"]).unwrap();
    let json = result.json().unwrap();

    assert_eq!(json["content"]["view"], "table");
    assert_eq!(json["content"]["summary"]["total_cases"], 8);
    assert_eq!(json["content"]["body"]["kind"], "table");

    let rows = json["content"]["body"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1]["qty_per_case"], serde_json::Value::Null);
    assert_eq!(rows[0]["total_quantity"], 20.0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_html_output_escapes_server_text() {
    let world = TestWorld::start().await.with_format("html");
    let records = vec![
        RecordBuilder::new(7)
            .bin("A-01")
            .product("0007", "<script>alert(1)</script>")
            .per_case(12.0)
            .cases(1500)
            .build(),
    ];
    server::mount_records(world.server(), &records).await;

    let result = world.run(&["list"]).unwrap();
    assert!(result.success());

    let html = result.stdout();
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("<tr class=\"totals-row\">"));
    assert!(html.contains("18,000"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_needs_config_points_at_settings() {
    let world = TestWorld::start().await;
    server::mount_needs_config(world.server()).await;

    let result = world.run(&["list"]).unwrap();
    assert!(!result.success());
    assert!(
        result
            .stderr()
            .contains("Please configure database connection in Settings")
    );
    assert!(result.stderr().contains("/settings"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unauthorized_points_at_login() {
    let world = TestWorld::start().await;
    server::mount_unauthorized(world.server()).await;

    let result = world.run(&["list"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Authentication required"));
    assert!(result.stderr().contains("/login"));
}
