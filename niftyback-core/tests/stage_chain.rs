//! End-to-end check of the stage chain on in-memory data, without a
//! provider: align → select → clean → normalize → simulate → compare.

use chrono::NaiveDate;
use niftyback_core::data::align::align_symbols;
use niftyback_core::data::provider::RawBar;
use niftyback_core::{
    clean, compare_to_benchmark, normalize, select_price_field, simulate_equal_weight, Verdict,
};
use std::collections::HashMap;

const BENCHMARK: &str = "^NSEI";

fn bar(date: &str, close: f64) -> RawBar {
    RawBar {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        close,
        adj_close: Some(close),
    }
}

fn series(closes: &[(&str, f64)]) -> Vec<RawBar> {
    closes.iter().map(|(d, c)| bar(d, *c)).collect()
}

#[test]
fn two_candidates_beat_a_falling_benchmark() {
    let mut input = HashMap::new();
    input.insert(
        "AAA".to_string(),
        series(&[("2024-01-02", 100.0), ("2024-01-03", 110.0)]),
    );
    input.insert(
        "BBB".to_string(),
        series(&[("2024-01-02", 50.0), ("2024-01-03", 60.0)]),
    );
    input.insert(
        BENCHMARK.to_string(),
        series(&[("2024-01-02", 200.0), ("2024-01-03", 190.0)]),
    );

    let order = vec![
        "AAA".to_string(),
        "BBB".to_string(),
        BENCHMARK.to_string(),
    ];
    let table = align_symbols(input, &order);
    let (selected, advisory) = select_price_field(&table).unwrap();
    assert!(advisory.is_none());

    let cleaned = clean(&selected);
    let normalized = normalize(&cleaned);

    assert_eq!(normalized.columns["AAA"], vec![100.0, 110.0]);
    assert_eq!(normalized.columns["BBB"], vec![100.0, 120.0]);

    let candidates = vec!["AAA".to_string(), "BBB".to_string()];
    let strategy = simulate_equal_weight(&normalized, &candidates).unwrap();
    assert_eq!(strategy.values, vec![100.0, 115.0]);
    assert_eq!(strategy.total_return_pct(), 15.0);

    let (cmp, advisory) =
        compare_to_benchmark(&normalized, BENCHMARK, strategy.total_return_pct());
    assert!(advisory.is_none());
    assert_eq!(cmp.benchmark_return_pct, Some(-5.0));
    assert_eq!(cmp.outperformance_pct, Some(20.0));
    assert_eq!(cmp.verdict, Some(Verdict::Success));
}

#[test]
fn all_missing_candidate_is_excluded_entirely() {
    // CCC is requested but never downloads; AAA alone carries the result.
    let mut input = HashMap::new();
    input.insert(
        "AAA".to_string(),
        series(&[("2024-01-02", 10.0), ("2024-01-03", 12.0)]),
    );
    input.insert(
        BENCHMARK.to_string(),
        series(&[("2024-01-02", 100.0), ("2024-01-03", 101.0)]),
    );

    let order = vec![
        "AAA".to_string(),
        "CCC".to_string(),
        BENCHMARK.to_string(),
    ];
    let table = align_symbols(input, &order);
    let (selected, _) = select_price_field(&table).unwrap();
    let cleaned = clean(&selected);
    let normalized = normalize(&cleaned);

    let candidates = vec!["AAA".to_string(), "CCC".to_string()];
    let strategy = simulate_equal_weight(&normalized, &candidates).unwrap();
    assert_eq!(strategy.members, vec!["AAA"]);
    assert_eq!(strategy.total_return_pct(), 20.0);
}

#[test]
fn degenerate_benchmark_surfaces_as_missing() {
    // A benchmark whose first (back-filled) price is zero is excluded by
    // the normalizer and the comparison degrades to the missing case.
    let mut input = HashMap::new();
    input.insert(
        "AAA".to_string(),
        series(&[("2024-01-02", 10.0), ("2024-01-03", 12.0)]),
    );
    input.insert(
        BENCHMARK.to_string(),
        series(&[("2024-01-02", 0.0), ("2024-01-03", 101.0)]),
    );

    let order = vec!["AAA".to_string(), BENCHMARK.to_string()];
    let table = align_symbols(input, &order);
    let (selected, _) = select_price_field(&table).unwrap();
    let cleaned = clean(&selected);
    let normalized = normalize(&cleaned);
    assert_eq!(normalized.excluded, vec![BENCHMARK]);

    let strategy =
        simulate_equal_weight(&normalized, &["AAA".to_string()]).unwrap();
    let (cmp, advisory) =
        compare_to_benchmark(&normalized, BENCHMARK, strategy.total_return_pct());
    assert_eq!(cmp.benchmark_return_pct, None);
    assert!(advisory.is_some());
}
