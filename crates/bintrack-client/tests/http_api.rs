use bintrack_client::{ClientError, ClientOptions, HttpInventoryApi, InventoryApi};
use bintrack_types::{Adjustment, BinId, HistoryFilter, OperationType, RecordDraft, RecordId};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> HttpInventoryApi {
    HttpInventoryApi::new(ClientOptions::new(server.uri())).unwrap()
}

#[tokio::test]
async fn test_list_records_decodes_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bin-locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {
                    "id": 1,
                    "BinLocation": "A-01",
                    "BinLocationID": 10,
                    "ProductUPC": "0001",
                    "ProductDescription": "Whole Milk",
                    "UnitQty2": 12,
                    "Qty_Cases": 3,
                    "TotalQuantity": 36
                },
                {
                    "id": 2,
                    "BinLocation": null,
                    "BinLocationID": null,
                    "ProductUPC": "0002",
                    "ProductDescription": null,
                    "UnitQty2": 0,
                    "Qty_Cases": 1,
                    "TotalQuantity": 0
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = client(&server).list_records().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].bin_location_name(), "A-01");
    assert_eq!(records[0].total_quantity(), Some(36.0));
    assert_eq!(records[1].total_quantity(), None);
}

#[tokio::test]
async fn test_needs_config_arrives_with_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bin-locations"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Database not configured.",
            "needs_config": true
        })))
        .mount(&server)
        .await;

    let err = client(&server).list_records().await.unwrap_err();

    assert!(err.is_needs_config());
    assert_eq!(err.to_string(), "Database not configured.");
}

#[tokio::test]
async fn test_unauthorized_short_circuits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bins"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Authentication required",
            "auth_required": true
        })))
        .mount(&server)
        .await;

    let err = client(&server).list_bins().await.unwrap_err();

    assert!(matches!(err, ClientError::AuthRequired));
}

#[tokio::test]
async fn test_rejected_envelope_keeps_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/bin-locations/7"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "Record is locked"
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .delete_record(RecordId::new(7))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Rejected(ref msg) if msg == "Record is locked"));
}

#[tokio::test]
async fn test_non_json_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bins"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client(&server).list_bins().await.unwrap_err();

    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_sends_snake_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/bin-locations"))
        .and(body_json(json!({
            "bin_location_id": 10,
            "product_upc": "0001",
            "product_description": "Whole Milk",
            "qty_per_case": null,
            "qty_cases": 4
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Record created successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = RecordDraft {
        bin_location_id: BinId::new(10),
        product_upc: "0001".to_string(),
        product_description: "Whole Milk".to_string(),
        qty_per_case: None,
        qty_cases: 4,
    };
    let message = client(&server).create_record(&draft).await.unwrap();

    assert_eq!(message, "Record created successfully");
}

#[tokio::test]
async fn test_adjust_patches_adjust_route() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/bin-locations/3/adjust"))
        .and(body_json(json!({"adjustment": -2, "notes": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Quantity adjusted by -2 cases"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adjustment = Adjustment {
        adjustment: -2,
        notes: None,
    };
    let message = client(&server)
        .adjust_record(RecordId::new(3), &adjustment)
        .await
        .unwrap();

    assert_eq!(message, "Quantity adjusted by -2 cases");
}

#[tokio::test]
async fn test_product_search_sends_query_and_skips_short_terms() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/search"))
        .and(query_param("q", "milk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {"ProductID": 5, "ProductUPC": "0001", "ProductDescription": "Whole Milk", "UnitQty2": 12}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let products = api.search_products("milk").await.unwrap();
    let none = api.search_products("m").await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].qty_per_case(), Some(12.0));
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_history_passes_filter_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/history"))
        .and(query_param("record_id", "4"))
        .and(query_param("operation_type", "ADJUST"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "HistoryID": 1,
                "RecordID": 4,
                "OperationType": "ADJUST",
                "Username": "jdoe",
                "AdjustmentAmount": 3
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = HistoryFilter::new()
        .record(RecordId::new(4))
        .operation(OperationType::Adjust)
        .limit(50);
    let entries = client(&server).history(&filter).await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].adjustment, Some(3));
}

#[tokio::test]
async fn test_session_cookie_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("cookie", "session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let options =
        ClientOptions::new(server.uri()).with_session_cookie(Some("session=abc123".to_string()));
    let api = HttpInventoryApi::new(options).unwrap();

    assert_eq!(api.health().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_logout_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server).logout().await.unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 500, .. }));
}
