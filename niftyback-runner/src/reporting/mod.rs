//! Report artifacts: SVG chart, text summary, equity exports.
//!
//! Only ever called with a successful [`BacktestRun`]; a fatal pipeline
//! abort writes nothing.

pub mod chart;
pub mod equity;
pub mod summary;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::result::BacktestRun;

pub use summary::render_summary;

/// Where each artifact of a run landed.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub chart_svg: PathBuf,
    pub equity_csv: PathBuf,
    pub equity_parquet: PathBuf,
    pub summary_json: PathBuf,
}

/// Write the full artifact set for a successful run.
pub fn write_artifacts(run: &BacktestRun, output_dir: &Path) -> Result<ArtifactPaths> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output dir {}", output_dir.display()))?;

    let paths = ArtifactPaths {
        chart_svg: output_dir.join("backtest_results.svg"),
        equity_csv: output_dir.join("equity.csv"),
        equity_parquet: output_dir.join("equity.parquet"),
        summary_json: output_dir.join("summary.json"),
    };

    chart::write_chart_svg(&paths.chart_svg, run)?;
    equity::write_equity_csv(&paths.equity_csv, &run.equity)?;
    equity::write_equity_parquet(&paths.equity_parquet, &run.equity)?;

    let json = serde_json::to_string_pretty(&run.summary)
        .context("failed to serialize run summary")?;
    std::fs::write(&paths.summary_json, json)
        .with_context(|| format!("failed to write {}", paths.summary_json.display()))?;

    Ok(paths)
}
