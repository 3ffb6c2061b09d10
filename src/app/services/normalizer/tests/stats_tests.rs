//! Tests for per-file normalization statistics

use crate::app::services::normalizer::stats::FileStats;

#[test]
fn test_new_stats_are_empty() {
    let stats = FileStats::new("100m.csv");
    assert_eq!(stats.file, "100m.csv");
    assert_eq!(stats.rows_total, 0);
    assert_eq!(stats.rows_indexed, 0);
    assert_eq!(stats.rows_failed, 0);
    assert!(stats.errors.is_empty());
}

#[test]
fn test_success_rate() {
    let mut stats = FileStats::new("100m.csv");
    stats.rows_total = 10;
    stats.rows_indexed = 9;
    stats.rows_failed = 1;

    assert_eq!(stats.success_rate(), 90.0);
    assert!(!stats.is_successful());

    stats.rows_indexed = 10;
    stats.rows_failed = 0;
    assert!(stats.is_successful());
}

#[test]
fn test_success_rate_with_no_rows() {
    let stats = FileStats::new("empty.csv");
    assert_eq!(stats.success_rate(), 0.0);
    assert!(!stats.is_successful());
}
