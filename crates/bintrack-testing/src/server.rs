//! Mount helpers for the mock inventory server.
//!
//! Each helper answers one route with the JSON envelope the real server
//! would send.

use bintrack_types::{Bin, HistoryEntry, Product, Record};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": data }))
}

fn message(status: u16, success: bool, text: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "success": success, "message": text }))
}

/// Record rows serialize with the server's column names, plus the
/// `TotalQuantity` column the client ignores.
pub fn record_rows(records: &[Record]) -> Value {
    Value::Array(
        records
            .iter()
            .map(|r| {
                let mut row = serde_json::to_value(r).unwrap_or(Value::Null);
                if let Value::Object(map) = &mut row {
                    map.insert(
                        "TotalQuantity".to_string(),
                        json!(r.total_quantity().unwrap_or(0.0)),
                    );
                }
                row
            })
            .collect(),
    )
}

pub async fn mount_records(server: &MockServer, records: &[Record]) {
    Mock::given(method("GET"))
        .and(path("/api/bin-locations"))
        .respond_with(ok(record_rows(records)))
        .mount(server)
        .await;
}

pub async fn mount_bins(server: &MockServer, bins: &[Bin]) {
    Mock::given(method("GET"))
        .and(path("/api/bins"))
        .respond_with(ok(json!(bins)))
        .mount(server)
        .await;
}

pub async fn mount_products(server: &MockServer, products: &[Product]) {
    Mock::given(method("GET"))
        .and(path("/api/products/search"))
        .respond_with(ok(json!(products)))
        .mount(server)
        .await;
}

pub async fn mount_history(server: &MockServer, entries: &[HistoryEntry]) {
    Mock::given(method("GET"))
        .and(path("/api/history"))
        .respond_with(ok(json!(entries)))
        .mount(server)
        .await;
}

/// Answer every mutation of a record (`PUT`/`DELETE` on `/api/bin-locations/{id}`
/// and `PATCH` on its `/adjust` subroute) or a create with `text`.
pub async fn mount_mutation(server: &MockServer, http_method: &str, text: &str) {
    let route = if http_method == "POST" {
        path_regex(r"^/api/bin-locations$")
    } else {
        path_regex(r"^/api/bin-locations/\d+(/adjust)?$")
    };
    Mock::given(method(http_method))
        .and(route)
        .respond_with(message(200, true, text))
        .mount(server)
        .await;
}

pub async fn mount_needs_config(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/bin-locations"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Database not configured. Please configure your database settings.",
            "needs_config": true
        })))
        .mount(server)
        .await;
}

pub async fn mount_unauthorized(server: &MockServer) {
    Mock::given(path_regex(r"^/api/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Authentication required",
            "auth_required": true
        })))
        .mount(server)
        .await;
}

pub async fn mount_health(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(server)
        .await;
}
