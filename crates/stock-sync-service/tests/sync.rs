//! Refill, audit, and sale integration tests.

mod common;

use common::{TestHarness, API_KEY};
use serde_json::json;

// ============================================================================
// Auth gate
// ============================================================================

#[tokio::test]
async fn sync_routes_require_api_key() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/sync/refill")
        .json(&json!({
            "productId": "PROD001",
            "vendorId": "VENDOR001",
            "quantity": 5,
            "timestamp": "2024-05-01T12:00:00Z"
        }))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn wrong_api_key_is_rejected() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/sync/refill")
        .add_header("x-api-key", "not-the-key")
        .json(&json!({
            "productId": "PROD001",
            "vendorId": "VENDOR001",
            "quantity": 5,
            "timestamp": "2024-05-01T12:00:00Z"
        }))
        .await;

    response.assert_status_unauthorized();
}

// ============================================================================
// Identifier validation
// ============================================================================

#[tokio::test]
async fn nul_bearing_identifiers_are_rejected_on_the_wire() {
    let harness = TestHarness::new();

    // "A\0B" as a product id would share a composite key with product
    // "A", vendor "B...". The deserializer must refuse it outright.
    let response = harness
        .server
        .post("/api/sync/refill")
        .add_header("x-api-key", API_KEY)
        .json(&json!({
            "productId": "A\u{0000}B",
            "vendorId": "C",
            "quantity": 5,
            "timestamp": "2024-05-01T12:00:00Z"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing leaked into product "A" through the shared key prefix.
    let response = harness
        .server
        .get("/api/inventory/A")
        .add_header("x-api-key", API_KEY)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["inventories"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_identifiers_are_rejected_on_the_wire() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/sync/refill")
        .add_header("x-api-key", API_KEY)
        .json(&json!({
            "productId": "PROD001",
            "vendorId": "",
            "quantity": 5,
            "timestamp": "2024-05-01T12:00:00Z"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn health_is_public() {
    let harness = TestHarness::new();

    let response = harness.server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

// ============================================================================
// Refill
// ============================================================================

#[tokio::test]
async fn refill_creates_record_and_appends_history() {
    let harness = TestHarness::new();

    let body = harness.seed_refill("PROD001", "VENDOR001", 20).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["inventory"]["quantityAvailable"], 20);
    assert_eq!(body["inventory"]["syncHistory"].as_array().unwrap().len(), 1);
    assert_eq!(body["inventory"]["syncHistory"][0]["action"], "refill");
    assert_eq!(body["inventory"]["syncHistory"][0]["quantity"], 20);
    assert_eq!(body["inventory"]["syncHistory"][0]["previousQuantity"], 0);
}

#[tokio::test]
async fn refill_accumulates_quantity() {
    let harness = TestHarness::new();

    harness.seed_refill("PROD001", "VENDOR001", 20).await;
    let body = harness.seed_refill("PROD001", "VENDOR001", 5).await;

    assert_eq!(body["inventory"]["quantityAvailable"], 25);
    assert_eq!(body["inventory"]["syncHistory"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn negative_refill_is_rejected() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/sync/refill")
        .add_header("x-api-key", API_KEY)
        .json(&json!({
            "productId": "PROD001",
            "vendorId": "VENDOR001",
            "quantity": -5,
            "timestamp": "2024-05-01T12:00:00Z"
        }))
        .await;

    response.assert_status_bad_request();
}

// ============================================================================
// Audit
// ============================================================================

#[tokio::test]
async fn audit_sets_absolute_quantity_and_records_both_histories() {
    let harness = TestHarness::new();
    harness.seed_refill("PROD001", "VENDOR001", 20).await;

    let response = harness
        .server
        .post("/api/sync/audit")
        .add_header("x-api-key", API_KEY)
        .json(&json!({
            "productId": "PROD001",
            "vendorId": "VENDOR001",
            "newQuantity": 12,
            "reason": "cycle count",
            "timestamp": "2024-05-02T08:00:00Z"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    // Absolute set, not additive.
    assert_eq!(body["inventory"]["quantityAvailable"], 12);

    let audits = body["inventory"]["auditHistory"].as_array().unwrap();
    assert_eq!(audits.len(), 1);
    assert_eq!(audits[0]["oldQuantity"], 20);
    assert_eq!(audits[0]["newQuantity"], 12);
    assert_eq!(audits[0]["reason"], "cycle count");

    let syncs = body["inventory"]["syncHistory"].as_array().unwrap();
    assert_eq!(syncs.len(), 2);
    assert_eq!(syncs[1]["action"], "audit");
    assert_eq!(syncs[1]["quantity"], -8);
}

#[tokio::test]
async fn audit_upserts_missing_record() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/sync/audit")
        .add_header("x-api-key", API_KEY)
        .json(&json!({
            "productId": "PROD009",
            "vendorId": "VENDOR001",
            "newQuantity": 7,
            "reason": "initial count",
            "timestamp": "2024-05-02T08:00:00Z"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["inventory"]["quantityAvailable"], 7);
    assert_eq!(body["inventory"]["auditHistory"][0]["oldQuantity"], 0);
}

#[tokio::test]
async fn negative_audit_quantity_is_rejected() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/sync/audit")
        .add_header("x-api-key", API_KEY)
        .json(&json!({
            "productId": "PROD001",
            "vendorId": "VENDOR001",
            "newQuantity": -1,
            "reason": "bad count",
            "timestamp": "2024-05-02T08:00:00Z"
        }))
        .await;

    response.assert_status_bad_request();
}

// ============================================================================
// Sale
// ============================================================================

fn sale_body(quantity: i64) -> serde_json::Value {
    json!({
        "productId": "PROD001",
        "vendorId": "VENDOR001",
        "quantity": quantity,
        "timestamp": "2024-05-03T10:00:00Z"
    })
}

#[tokio::test]
async fn sale_decrements_stock() {
    let harness = TestHarness::new();
    harness.seed_refill("PROD001", "VENDOR001", 25).await;

    let response = harness
        .server
        .post("/api/sync/sale")
        .add_header("x-api-key", API_KEY)
        .json(&sale_body(10))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["inventory"]["quantityAvailable"], 15);

    let entry = body["inventory"]["syncHistory"].as_array().unwrap().last().cloned().unwrap();
    assert_eq!(entry["action"], "sale");
    assert_eq!(entry["quantity"], -10);
    assert_eq!(entry["previousQuantity"], 25);
}

#[tokio::test]
async fn oversell_fails_and_leaves_stock_unchanged() {
    let harness = TestHarness::new();
    harness.seed_refill("PROD001", "VENDOR001", 25).await;

    let response = harness
        .server
        .post("/api/sync/sale")
        .add_header("x-api-key", API_KEY)
        .json(&sale_body(30))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "insufficient_stock");
    assert_eq!(body["error"]["details"]["currentStock"], 25);

    // A successful sale afterwards still sees the full 25.
    let response = harness
        .server
        .post("/api/sync/sale")
        .add_header("x-api-key", API_KEY)
        .json(&sale_body(10))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["inventory"]["quantityAvailable"], 15);
}

#[tokio::test]
async fn sale_against_missing_record_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/sync/sale")
        .add_header("x-api-key", API_KEY)
        .json(&sale_body(1))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["details"]["currentStock"], 0);
}
