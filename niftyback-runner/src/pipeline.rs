//! The backtest pipeline.
//!
//! Strictly sequential: each stage consumes the complete output of the
//! previous one. Fatal conditions abort at the stage boundary where they
//! occur — the error names the stage — and nothing is written to disk by
//! this function; artifact output belongs to [`crate::reporting`] and
//! only ever runs on a successful result.

use chrono::NaiveDate;
use niftyback_core::{
    clean, compare_to_benchmark, fetch_table, load_buy_list, normalize, select_price_field,
    simulate_equal_weight, BuyListError, FetchError, FetchProgress, FieldNotFound,
    NoValidCandidates, PriceProvider,
};
use thiserror::Error;

use crate::config::{BacktestConfig, ConfigError};
use crate::result::{BacktestRun, BacktestSummary, EquityPoint, SCHEMA_VERSION};

/// Fatal pipeline failures, tagged with the stage that raised them.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("buy-list stage: {0}")]
    BuyList(#[from] BuyListError),

    #[error("fetch stage: {0}")]
    Fetch(#[from] FetchError),

    #[error("field-selection stage: {0}")]
    FieldSelection(#[from] FieldNotFound),

    #[error("simulation stage: {0}")]
    Simulation(#[from] NoValidCandidates),
}

/// Run the full pipeline: load → fetch → select → clean → normalize →
/// simulate → compare.
///
/// `today` is passed in rather than read from the clock so runs are
/// reproducible in tests; the CLI passes the current date. The buy list
/// is loaded before anything touches the network — a bad list halts the
/// run with zero side effects.
pub fn run_backtest(
    config: &BacktestConfig,
    provider: &dyn PriceProvider,
    progress: Option<&dyn FetchProgress>,
    today: NaiveDate,
) -> Result<BacktestRun, PipelineError> {
    let (start, end) = config.window(today)?;
    let candidates = load_buy_list(&config.buy_list)?;

    let mut symbols = candidates.clone();
    if !symbols.contains(&config.benchmark) {
        symbols.push(config.benchmark.clone());
    }

    let report = fetch_table(provider, &symbols, start, end, progress)?;
    let (selected, field_advisory) = select_price_field(&report.table)?;
    let cleaned = clean(&selected);
    let normalized = normalize(&cleaned);

    let strategy = simulate_equal_weight(&normalized, &candidates)?;
    let (comparison, benchmark_advisory) =
        compare_to_benchmark(&normalized, &config.benchmark, strategy.total_return_pct());

    let mut advisories = Vec::new();
    advisories.extend(field_advisory);
    advisories.extend(benchmark_advisory);

    let mut dropped_symbols: Vec<String> =
        report.failures.iter().map(|(s, _)| s.clone()).collect();
    dropped_symbols.extend(cleaned.dropped.iter().cloned());
    dropped_symbols.extend(normalized.excluded.iter().cloned());

    let equity: Vec<EquityPoint> = strategy
        .dates
        .iter()
        .zip(&strategy.values)
        .enumerate()
        .map(|(i, (date, value))| EquityPoint {
            date: *date,
            strategy: *value,
            benchmark: comparison.series.as_ref().map(|s| s[i]),
        })
        .collect();

    let summary = BacktestSummary {
        schema_version: SCHEMA_VERSION,
        run_id: config.run_id(start, end),
        window_start: start,
        window_end: end,
        price_field: selected.field,
        strategy_return_pct: strategy.total_return_pct(),
        benchmark_return_pct: comparison.benchmark_return_pct,
        outperformance_pct: comparison.outperformance_pct,
        verdict: comparison.verdict,
        members: strategy.members,
        dropped_symbols,
        advisories,
    };

    Ok(BacktestRun { summary, equity })
}
