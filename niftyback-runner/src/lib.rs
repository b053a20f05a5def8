//! niftyback runner — wires the engine stages into one sequential run.
//!
//! - [`config`] — run configuration (TOML file + CLI overrides) and the
//!   lookback window
//! - [`pipeline`] — the stage sequence itself; fatal errors name the
//!   failing stage
//! - [`result`] — the serializable run summary and equity curve
//! - [`reporting`] — SVG chart, text summary, CSV/Parquet equity export

pub mod config;
pub mod pipeline;
pub mod reporting;
pub mod result;

pub use config::{BacktestConfig, ConfigError};
pub use pipeline::{run_backtest, PipelineError};
pub use reporting::{write_artifacts, ArtifactPaths};
pub use result::{BacktestRun, BacktestSummary, EquityPoint, SCHEMA_VERSION};
