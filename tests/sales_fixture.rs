//! Query and aggregation results over the ten-sale fixture

mod common;

use chrono::NaiveDate;
use common::{engine, ids, sales};
use serde_json::json;
use tallydb::{Criteria, Engine, EngineConfig, Field, GroupBy, RawRecord, RecordId, ScanType, TallyError};

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_empty_criteria_returns_all_in_order() {
    let engine = engine();
    let result = engine.search(&Criteria::new());
    assert_eq!(result.len(), 10);
    assert_eq!(result.ids(), (1..=10).map(RecordId).collect::<Vec<_>>());
}

#[test]
fn test_category_and_vendor() {
    let engine = engine();
    let result = engine.search(&Criteria::new().eq("category", "Accesorios").eq("vendor", "Juan"));

    assert_eq!(result.scan_type, ScanType::IndexIntersection);
    assert_eq!(result.len(), 1);
    let record = result.records[0];
    assert_eq!(record.id, RecordId(8));
    assert_eq!(record.product, "Teclado");
    assert_eq!(record.price, 85.0);
    assert_eq!(record.vendor, "Juan");
}

#[test]
fn test_indexed_and_residual_criteria() {
    let engine = engine();
    let result = engine.search(&Criteria::new().eq("product", "Laptop").eq("price", 1500));
    assert_eq!(result.scan_type, ScanType::IndexIntersection);
    assert_eq!(result.ids(), vec![RecordId(5)]);
    // Only the two laptops are examined against the price filter
    assert_eq!(result.candidate_count, 2);
}

#[test]
fn test_residual_only_is_full_scan() {
    let engine = engine();
    let result = engine.search(&Criteria::new().eq("date", "2023-03-10"));
    assert_eq!(result.scan_type, ScanType::FullScan);
    assert_eq!(result.ids(), vec![RecordId(7)]);
}

#[test]
fn test_absent_value_and_unknown_attribute() {
    let engine = engine();
    assert!(engine.search(&Criteria::new().eq("vendor", "NoExiste")).is_empty());
    assert!(engine.search(&Criteria::new().eq("color", "rojo")).is_empty());
    assert!(engine.search(&Criteria::new().eq("price", "1200")).is_empty());
}

#[test]
fn test_explain_reports_plan() {
    let engine = engine();
    let explain = engine.explain(&Criteria::new().eq("vendor", "Ana").eq("price", 80));
    assert_eq!(explain.scan_type, ScanType::IndexIntersection);
    assert_eq!(explain.index_lookups, vec!["vendor = \"Ana\""]);
    assert_eq!(explain.residual_filters, vec!["price = 80"]);
    assert_eq!(explain.estimated_candidates, 4);
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn test_get_by_id() {
    let engine = engine();
    assert_eq!(engine.get(RecordId(6)).unwrap().product, "Teléfono");
    assert_eq!(engine.get(RecordId(11)).unwrap_err(), TallyError::NotFound(RecordId(11)));
}

// =============================================================================
// Range
// =============================================================================

#[test]
fn test_range_is_inclusive() {
    let engine = engine();
    let records = engine.search_by_date_range("2023-02-01", "2023-03-31").unwrap();
    assert_eq!(ids(&records), vec![3, 4, 5, 6, 7, 8]);

    let exact = engine.search_by_date_range("2023-01-20", "2023-02-05").unwrap();
    assert_eq!(ids(&exact), vec![2, 3]);
}

#[test]
fn test_typed_range_is_inclusive() {
    let engine = engine();
    let day = |m, d| NaiveDate::from_ymd_opt(2023, m, d).unwrap();

    let records = engine.search_between(day(2, 1), day(3, 31));
    assert_eq!(ids(&records), vec![3, 4, 5, 6, 7, 8]);

    let single = engine.search_between(day(3, 15), day(3, 15));
    assert_eq!(ids(&single), vec![8]);

    assert!(engine.search_between(day(3, 31), day(2, 1)).is_empty());
    assert_eq!(engine.metrics().snapshot().range_queries, 3);
}

#[test]
fn test_inverted_range_is_empty() {
    let engine = engine();
    assert!(engine.search_by_date_range("2023-04-01", "2023-01-01").unwrap().is_empty());
}

#[test]
fn test_malformed_range_bound() {
    let engine = engine();
    let err = engine.search_by_date_range("2023-02-01", "31/03/2023").unwrap_err();
    assert!(err.is_data_format());
    assert!(err.to_string().contains("range end"));
}

// =============================================================================
// Aggregation
// =============================================================================

#[test]
fn test_most_frequent_products_ties_by_first_appearance() {
    let engine = engine();
    let top = engine.most_frequent(Field::Product, 2);
    assert_eq!(
        top,
        vec![("Laptop".to_string(), 2), ("Monitor".to_string(), 2)]
    );
    assert!(engine.most_frequent(Field::Product, 0).is_empty());
    assert_eq!(engine.most_frequent(Field::Product, 50).len(), 6);
}

#[test]
fn test_most_frequent_vendor() {
    let engine = engine();
    let top = engine.most_frequent(Field::Vendor, 1);
    assert_eq!(top, vec![("Ana".to_string(), 4)]);
}

#[test]
fn test_category_sums() {
    let engine = engine();
    let sums = engine.sum_by(GroupBy::Category);
    assert_eq!(sums.len(), 2);
    assert_eq!(sums["Electrónica"], 4250.0);
    assert_eq!(sums["Accesorios"], 220.0);
}

#[test]
fn test_month_sums() {
    let engine = engine();
    let sums = engine.sum_by(GroupBy::Month);
    let months: Vec<&str> = sums.keys().map(String::as_str).collect();
    assert_eq!(months, vec!["2023-01", "2023-02", "2023-03", "2023-04"]);
    assert_eq!(sums["2023-02"], 1605.0);
}

#[test]
fn test_vendor_statistics() {
    let engine = engine();
    let stats = engine.vendor_statistics("Ana").unwrap();
    assert_eq!(stats.total, 2330.0);
    assert_eq!(stats.mean, 582.5);
    assert_eq!(stats.median, 525.0);
    assert_eq!(stats.count, 4);
    assert_eq!(stats.min, 80.0);
    assert_eq!(stats.max, 1200.0);

    assert!(engine.vendor_statistics("NoExiste").is_none());
}

#[test]
fn test_statistics_serialize() {
    let engine = engine();
    let stats = engine.vendor_statistics("Pedro").unwrap();
    assert_eq!(
        serde_json::to_value(stats).unwrap(),
        json!({
            "total": 355.0,
            "mean": 355.0 / 3.0,
            "median": 30.0,
            "min": 25.0,
            "max": 300.0,
            "count": 3
        })
    );
}

// =============================================================================
// Construction failures
// =============================================================================

fn build_with(extra: RawRecord) -> TallyError {
    let mut raw = sales();
    raw.push(extra);
    Engine::with_config(raw, EngineConfig::quiet()).unwrap_err()
}

#[test]
fn test_malformed_date_rejected() {
    let err = build_with(RawRecord::new(11, "Cable", "Accesorios", 5, "2023-13-01", "Ana"));
    assert!(err.is_data_format());
    assert_eq!(err.record_id(), Some(RecordId(11)));
}

#[test]
fn test_negative_price_rejected() {
    let err = build_with(RawRecord::new(11, "Cable", "Accesorios", -5, "2023-01-01", "Ana"));
    assert_eq!(err.record_id(), Some(RecordId(11)));
}

#[test]
fn test_non_numeric_price_rejected() {
    let err = build_with(RawRecord::new(11, "Cable", "Accesorios", "cinco", "2023-01-01", "Ana"));
    assert_eq!(err.code(), "TALLY_DATA_FORMAT");
    assert_eq!(err.record_id(), Some(RecordId(11)));
}

#[test]
fn test_duplicate_id_rejected() {
    let err = build_with(RawRecord::new(3, "Cable", "Accesorios", 5, "2023-01-01", "Ana"));
    assert_eq!(err.record_id(), Some(RecordId(3)));
}

#[test]
fn test_empty_input_builds_empty_engine() {
    let engine = Engine::with_config(Vec::new(), EngineConfig::quiet()).unwrap();
    assert!(engine.is_empty());
    assert!(engine.search(&Criteria::new()).is_empty());
    assert!(engine.sum_by(GroupBy::Vendor).is_empty());
    assert!(engine.most_frequent(Field::Product, 3).is_empty());
}
