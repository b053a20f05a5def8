//! Line-chart artifact.
//!
//! Renders the strategy and benchmark series as a standalone SVG. The SVG
//! is assembled by hand; the chart is two polylines, axis labels, and a
//! legend, which does not justify a rendering dependency.

use anyhow::{Context, Result};
use std::path::Path;

use crate::result::{BacktestRun, EquityPoint};

const WIDTH: i32 = 720;
const HEIGHT: i32 = 360;
const PADDING: f64 = 48.0;
const STRATEGY_COLOR: &str = "#2e7d32";
const BENCHMARK_COLOR: &str = "#8c8c8c";

/// Render the run's chart as an SVG document.
pub fn render_chart_svg(run: &BacktestRun) -> String {
    let equity = &run.equity;
    let has_benchmark = equity.iter().any(|p| p.benchmark.is_some());

    let (min_v, max_v) = extent(equity);
    let plot_w = f64::from(WIDTH) - 2.0 * PADDING;
    let plot_h = f64::from(HEIGHT) - 2.0 * PADDING;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}"><style>text{{font-family:Arial,sans-serif;font-size:11px;fill:#555}}</style>"#
    ));

    // Title with the evaluation window
    svg.push_str(&format!(
        r#"<text x="{}" y="20" text-anchor="middle" style="font-size:14px;fill:#222">Backtest: strategy vs benchmark ({} to {})</text>"#,
        WIDTH / 2,
        run.summary.window_start,
        run.summary.window_end,
    ));

    // Plot frame
    svg.push_str(&format!(
        r##"<rect x="{PADDING}" y="{PADDING}" width="{plot_w}" height="{plot_h}" fill="none" stroke="#ddd"/>"##
    ));

    // Base-100 guide line
    if min_v <= 100.0 && 100.0 <= max_v {
        let y = PADDING + scale_y(100.0, min_v, max_v, plot_h);
        svg.push_str(&format!(
            r##"<line x1="{PADDING}" y1="{y}" x2="{}" y2="{y}" stroke="#ccc" stroke-dasharray="2 4"/>"##,
            PADDING + plot_w,
        ));
    }

    // Benchmark first so the strategy line draws on top
    if has_benchmark {
        let points = polyline(
            equity.len(),
            |i| equity[i].benchmark,
            min_v,
            max_v,
            plot_w,
            plot_h,
        );
        svg.push_str(&format!(
            r#"<polyline points="{points}" fill="none" stroke="{BENCHMARK_COLOR}" stroke-width="1.5" stroke-dasharray="6 4"/>"#
        ));
    }

    let points = polyline(
        equity.len(),
        |i| Some(equity[i].strategy),
        min_v,
        max_v,
        plot_w,
        plot_h,
    );
    svg.push_str(&format!(
        r#"<polyline points="{points}" fill="none" stroke="{STRATEGY_COLOR}" stroke-width="2"/>"#
    ));

    // Y-axis labels (growth of 100)
    for value in [min_v, (min_v + max_v) / 2.0, max_v] {
        let y = PADDING + scale_y(value, min_v, max_v, plot_h);
        svg.push_str(&format!(
            r#"<text x="{}" y="{:.1}" text-anchor="end">{value:.0}</text>"#,
            PADDING - 6.0,
            y + 4.0,
        ));
    }

    // X-axis labels (window bounds)
    if let (Some(first), Some(last)) = (equity.first(), equity.last()) {
        svg.push_str(&format!(
            r#"<text x="{PADDING}" y="{}" text-anchor="start">{}</text>"#,
            f64::from(HEIGHT) - PADDING + 16.0,
            first.date,
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="end">{}</text>"#,
            PADDING + plot_w,
            f64::from(HEIGHT) - PADDING + 16.0,
            last.date,
        ));
    }

    // Legend
    let legend_y = PADDING - 12.0;
    svg.push_str(&format!(
        r#"<line x1="{PADDING}" y1="{legend_y}" x2="{}" y2="{legend_y}" stroke="{STRATEGY_COLOR}" stroke-width="2"/><text x="{}" y="{}">Strategy (equal weight)</text>"#,
        PADDING + 24.0,
        PADDING + 30.0,
        legend_y + 4.0,
    ));
    if has_benchmark {
        let x = PADDING + 200.0;
        svg.push_str(&format!(
            r#"<line x1="{x}" y1="{legend_y}" x2="{}" y2="{legend_y}" stroke="{BENCHMARK_COLOR}" stroke-width="1.5" stroke-dasharray="6 4"/><text x="{}" y="{}">Benchmark</text>"#,
            x + 24.0,
            x + 30.0,
            legend_y + 4.0,
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Write the chart to disk.
pub fn write_chart_svg(path: &Path, run: &BacktestRun) -> Result<()> {
    std::fs::write(path, render_chart_svg(run))
        .with_context(|| format!("failed to write chart {}", path.display()))
}

/// Value range across both series, widened when flat so a constant series
/// still renders mid-plot.
fn extent(equity: &[EquityPoint]) -> (f64, f64) {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for point in equity {
        for value in std::iter::once(point.strategy).chain(point.benchmark) {
            if value.is_finite() {
                min_v = min_v.min(value);
                max_v = max_v.max(value);
            }
        }
    }
    if !min_v.is_finite() || !max_v.is_finite() {
        return (0.0, 200.0);
    }
    if (max_v - min_v).abs() < f64::EPSILON {
        let adjust = if min_v == 0.0 { 1.0 } else { min_v.abs() * 0.1 };
        min_v -= adjust;
        max_v += adjust;
    }
    (min_v, max_v)
}

/// Y offset within the plot area (0 = top).
fn scale_y(value: f64, min_v: f64, max_v: f64, plot_h: f64) -> f64 {
    (1.0 - (value - min_v) / (max_v - min_v)) * plot_h
}

/// Build an SVG polyline points string, skipping absent values.
fn polyline(
    n: usize,
    value_at: impl Fn(usize) -> Option<f64>,
    min_v: f64,
    max_v: f64,
    plot_w: f64,
    plot_h: f64,
) -> String {
    let mut points = String::new();
    for i in 0..n {
        let Some(value) = value_at(i) else { continue };
        let x = if n > 1 {
            PADDING + (i as f64) / ((n - 1) as f64) * plot_w
        } else {
            PADDING + plot_w / 2.0
        };
        let y = PADDING + scale_y(value, min_v, max_v, plot_h);
        if !points.is_empty() {
            points.push(' ');
        }
        points.push_str(&format!("{x:.1},{y:.1}"));
    }
    points
}
