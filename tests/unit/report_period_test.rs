//! Date-range resolution for sales reports
//!
//! Both bounds present -> literal range. Anything else -> the clock's current
//! date as a single-day range.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::*;
use kasir_api::core::FixedClock;
use kasir_api::reports::models::{DateRange, ReportPeriod};
use kasir_api::reports::ReportService;

fn service_at(store: Arc<MemorySalesStore>, today: &str) -> ReportService {
    ReportService::new(store, Arc::new(FixedClock(date(today))), Duration::from_secs(5))
}

async fn resolved_range(start: Option<&str>, end: Option<&str>, today: &str) -> DateRange {
    let store = Arc::new(MemorySalesStore::default());
    service_at(store.clone(), today)
        .resolve(ReportPeriod::from_params(start, end))
        .await
        .expect("report should resolve");

    let ranges = store.queried_ranges();
    assert_eq!(ranges.len(), 1, "exactly one aggregation per request");
    ranges[0].clone()
}

#[tokio::test]
async fn test_no_bounds_defaults_to_today() {
    let range = resolved_range(None, None, "2024-05-17").await;
    assert_eq!(range, DateRange::new("2024-05-17", "2024-05-17"));
}

#[tokio::test]
async fn test_only_start_falls_back_to_today() {
    let range = resolved_range(Some("2024-01-01"), None, "2024-05-17").await;
    assert_eq!(range, DateRange::new("2024-05-17", "2024-05-17"));
}

#[tokio::test]
async fn test_only_end_falls_back_to_today() {
    let range = resolved_range(None, Some("2024-01-31"), "2024-05-17").await;
    assert_eq!(range, DateRange::new("2024-05-17", "2024-05-17"));
}

#[tokio::test]
async fn test_empty_strings_fall_back_to_today() {
    let range = resolved_range(Some(""), Some(""), "2024-05-17").await;
    assert_eq!(range, DateRange::new("2024-05-17", "2024-05-17"));
}

#[tokio::test]
async fn test_both_bounds_are_used_verbatim() {
    let range = resolved_range(Some("2024-01-01"), Some("2024-01-31"), "2024-05-17").await;
    assert_eq!(range, DateRange::new("2024-01-01", "2024-01-31"));
}

#[tokio::test]
async fn test_inverted_range_is_not_rejected() {
    // start after end is forwarded; it simply matches nothing
    let store = Arc::new(MemorySalesStore::new(reference_sales()));
    let report = service_at(store, "2024-05-17")
        .resolve(ReportPeriod::from_params(Some("2024-01-02"), Some("2024-01-01")))
        .await
        .unwrap();

    assert!(report.is_empty());
    assert_eq!(report.top_product.name, "");
}

#[tokio::test]
async fn test_today_follows_the_clock() {
    let store = Arc::new(MemorySalesStore::new(reference_sales()));

    let first = service_at(store.clone(), "2024-01-01")
        .resolve(ReportPeriod::DefaultToday)
        .await
        .unwrap();
    let second = service_at(store, "2024-01-02")
        .resolve(ReportPeriod::DefaultToday)
        .await
        .unwrap();

    assert_eq!(first.total_revenue, 10);
    assert_eq!(first.top_product.name, "A");
    assert_eq!(second.total_revenue, 20);
    assert_eq!(second.top_product.name, "B");
}
