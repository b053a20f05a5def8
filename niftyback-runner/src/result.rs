//! Serializable run results.

use chrono::NaiveDate;
use niftyback_core::{Advisory, PriceField, Verdict};
use serde::{Deserialize, Serialize};

/// Current schema version for persisted summaries.
pub const SCHEMA_VERSION: u32 = 1;

/// Structured summary of one backtest run. Computed once per invocation;
/// persisted only as a report artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestSummary {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Content hash of the run configuration and window.
    pub run_id: String,

    pub window_start: NaiveDate,
    pub window_end: NaiveDate,

    /// The price field all returns were computed from.
    pub price_field: PriceField,

    /// Equal-weight portfolio growth over the window, in percentage points.
    pub strategy_return_pct: f64,

    /// Benchmark growth over the window; absent when the benchmark failed
    /// to download or was excluded as degenerate.
    pub benchmark_return_pct: Option<f64>,

    /// `strategy - benchmark`; absent with the benchmark.
    pub outperformance_pct: Option<f64>,

    pub verdict: Option<Verdict>,

    /// Candidates that actually contributed to the strategy mean.
    pub members: Vec<String>,

    /// Symbols that fell out along the way (failed fetch, all-gap history,
    /// degenerate first price).
    pub dropped_symbols: Vec<String>,

    pub advisories: Vec<Advisory>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// One row of the chartable output: strategy (and benchmark, if present)
/// on the 100-based scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub strategy: f64,
    pub benchmark: Option<f64>,
}

/// Full output of a successful run: the summary plus the series the
/// reporter renders.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestRun {
    pub summary: BacktestSummary,
    pub equity: Vec<EquityPoint>,
}
