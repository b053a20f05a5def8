//! Benchmark comparison and verdict.

use crate::advisory::Advisory;
use crate::normalize::NormalizedTable;
use serde::{Deserialize, Serialize};

/// Classification of the strategy against the benchmark.
///
/// `Success` requires strictly beating the benchmark; an exact tie counts
/// as underperformance. That boundary is inherited behavior and is pinned
/// by a test rather than silently changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Success,
    Underperformance,
}

/// Benchmark side of the backtest result. All fields are absent when the
/// benchmark failed to download or was excluded as degenerate.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkComparison {
    pub benchmark_return_pct: Option<f64>,
    pub outperformance_pct: Option<f64>,
    pub verdict: Option<Verdict>,
    /// The benchmark's normalized series, for charting.
    pub series: Option<Vec<f64>>,
}

/// Compare the strategy return to the benchmark's own normalized return.
///
/// The benchmark is computed the same way as any candidate
/// (`last - 100`). When its column did not survive the earlier stages the
/// comparison is skipped with [`Advisory::BenchmarkMissing`] and the
/// strategy result stands on its own.
pub fn compare_to_benchmark(
    table: &NormalizedTable,
    benchmark_symbol: &str,
    strategy_return_pct: f64,
) -> (BenchmarkComparison, Option<Advisory>) {
    let Some(column) = table.columns.get(benchmark_symbol) else {
        return (
            BenchmarkComparison {
                benchmark_return_pct: None,
                outperformance_pct: None,
                verdict: None,
                series: None,
            },
            Some(Advisory::BenchmarkMissing {
                symbol: benchmark_symbol.to_string(),
            }),
        );
    };

    let benchmark_return_pct = column.last().map(|v| v - 100.0).unwrap_or(0.0);
    let outperformance_pct = strategy_return_pct - benchmark_return_pct;
    let verdict = if strategy_return_pct > benchmark_return_pct {
        Verdict::Success
    } else {
        Verdict::Underperformance
    };

    (
        BenchmarkComparison {
            benchmark_return_pct: Some(benchmark_return_pct),
            outperformance_pct: Some(outperformance_pct),
            verdict: Some(verdict),
            series: Some(column.clone()),
        },
        None,
    )
}
