//! Text summary of a run.

use niftyback_core::Verdict;
use std::fmt::Write;

use crate::result::BacktestSummary;

/// Render the structured summary as the console report.
pub fn render_summary(summary: &BacktestSummary) -> String {
    let mut out = String::new();

    writeln!(out, "--- BACKTEST RESULTS ---").unwrap();
    writeln!(
        out,
        "Window:            {} to {}",
        summary.window_start, summary.window_end
    )
    .unwrap();
    writeln!(out, "Price field:       {}", summary.price_field.label()).unwrap();
    writeln!(
        out,
        "Strategy return:   {:.2}%",
        summary.strategy_return_pct
    )
    .unwrap();

    if let Some(benchmark_return) = summary.benchmark_return_pct {
        writeln!(out, "Benchmark return:  {benchmark_return:.2}%").unwrap();
    }

    match (summary.verdict, summary.outperformance_pct) {
        (Some(Verdict::Success), Some(diff)) => {
            writeln!(out, "SUCCESS: strategy beat the benchmark by {diff:.2}%").unwrap();
        }
        (Some(Verdict::Underperformance), Some(diff)) => {
            writeln!(out, "UNDERPERFORMANCE: strategy lagged by {:.2}%", diff.abs()).unwrap();
        }
        _ => {}
    }

    for advisory in &summary.advisories {
        writeln!(out, "note: {advisory}").unwrap();
    }

    out
}
