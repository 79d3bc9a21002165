//! Contract tests for the sales report API
//!
//! GET /report and GET /report/today through the full route table: response
//! field names, defaults, method rejection and storage failure mapping.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::test;
use serde_json::{json, Value};

use helpers::*;

async fn get_json(stores: &TestStores, today: &str, uri: &str) -> (u16, Value) {
    let app = test::init_service(test_app(stores.services(date(today)))).await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn test_report_response_uses_contract_field_names() {
    let stores = TestStores::new(MemorySalesStore::new(reference_sales()));

    let (status, body) = get_json(
        &stores,
        "2024-06-01",
        "/report?start_date=2024-01-01&end_date=2024-01-02",
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "total_revenue": 30,
            "total_transaksi": 2,
            "produk_terlaris": { "nama": "B", "qty_terjual": 3 }
        })
    );
}

#[actix_web::test]
async fn test_empty_range_returns_zero_report() {
    let stores = TestStores::new(MemorySalesStore::new(reference_sales()));

    let (status, body) = get_json(
        &stores,
        "2024-06-01",
        "/report?start_date=2024-01-03&end_date=2024-01-03",
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["total_revenue"], 0);
    assert_eq!(body["total_transaksi"], 0);
    assert_eq!(body["produk_terlaris"], json!({ "nama": "", "qty_terjual": 0 }));
}

#[actix_web::test]
async fn test_today_route_reports_current_day() {
    let stores = TestStores::new(MemorySalesStore::new(reference_sales()));

    let (status, body) = get_json(&stores, "2024-01-01", "/report/today").await;

    assert_eq!(status, 200);
    assert_eq!(body["total_revenue"], 10);
    assert_eq!(body["produk_terlaris"]["nama"], "A");
    assert_eq!(
        stores.sales.queried_ranges(),
        vec![kasir_api::reports::DateRange::new("2024-01-01", "2024-01-01")]
    );
}

#[actix_web::test]
async fn test_single_bound_is_ignored() {
    let stores = TestStores::new(MemorySalesStore::new(reference_sales()));

    let (status, body) = get_json(&stores, "2024-01-02", "/report?start_date=2024-01-01").await;

    assert_eq!(status, 200);
    assert_eq!(body["total_revenue"], 20);
    assert_eq!(body["total_transaksi"], 1);
}

#[actix_web::test]
async fn test_repeated_parameter_uses_first_value() {
    let stores = TestStores::new(MemorySalesStore::new(reference_sales()));

    let (status, body) = get_json(
        &stores,
        "2024-06-01",
        "/report?start_date=2024-01-01&start_date=2024-01-02&end_date=2024-01-02",
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["total_revenue"], 30);
    assert_eq!(body["total_transaksi"], 2);
    assert_eq!(
        stores.sales.queried_ranges(),
        vec![kasir_api::reports::DateRange::new("2024-01-01", "2024-01-02")]
    );
}

#[actix_web::test]
async fn test_unknown_parameters_are_ignored() {
    let stores = TestStores::new(MemorySalesStore::new(reference_sales()));

    let (status, body) = get_json(&stores, "2024-01-02", "/report/today?page=2&sort").await;

    assert_eq!(status, 200);
    assert_eq!(body["total_revenue"], 20);
}

#[actix_web::test]
async fn test_write_methods_are_rejected() {
    let stores = TestStores::new(MemorySalesStore::default());
    let app = test::init_service(test_app(stores.services(date("2024-01-01")))).await;

    for uri in ["/report", "/report/today"] {
        for req in [
            test::TestRequest::post().uri(uri).to_request(),
            test::TestRequest::put().uri(uri).to_request(),
            test::TestRequest::delete().uri(uri).to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 405, "{} should reject writes", uri);
        }
    }
    assert!(stores.sales.queried_ranges().is_empty());
}

#[actix_web::test]
async fn test_storage_failure_returns_500_with_raw_text() {
    let sales = MemorySalesStore::new(reference_sales());
    sales.fail_with("connection to server was lost");
    let stores = TestStores::new(sales);

    let (status, body) = get_json(&stores, "2024-01-01", "/report").await;

    assert_eq!(status, 500);
    assert_eq!(body["error"]["code"], 500);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("connection to server was lost"));
    assert!(body.get("total_revenue").is_none());
}

#[actix_web::test]
async fn test_malformed_date_surfaces_as_500() {
    let stores = TestStores::new(MemorySalesStore::new(reference_sales()));

    let (status, body) = get_json(
        &stores,
        "2024-01-01",
        "/report?start_date=yesterday&end_date=2024-01-02",
    )
    .await;

    assert_eq!(status, 500);
    assert!(body["error"]["message"].as_str().unwrap().contains("yesterday"));
}

#[actix_web::test]
async fn test_response_carries_request_id() {
    let stores = TestStores::new(MemorySalesStore::default());
    let app = test::init_service(test_app(stores.services(date("2024-01-01")))).await;

    let req = test::TestRequest::get()
        .uri("/report/today")
        .insert_header(("X-Request-ID", "kasir-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.headers().get("x-request-id").unwrap(), "kasir-42");
}
