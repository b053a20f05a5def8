//! Run configuration.
//!
//! A run is fully described by the buy-list path, the benchmark symbol,
//! the lookback length in years, and the output directory. The config can
//! come from a TOML file, be overridden from CLI flags, and hashes to a
//! deterministic run id: two runs with identical configs and windows
//! produce the same id.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default benchmark: the NIFTY 50 index.
pub const DEFAULT_BENCHMARK: &str = "^NSEI";

/// Default lookback window in years.
pub const DEFAULT_YEARS: u32 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("failed to parse config {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("lookback years must be a positive integer, got {0}")]
    InvalidYears(u32),
}

/// Serializable configuration for a single backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestConfig {
    /// Path to the persisted buy list (CSV with a ticker column).
    pub buy_list: PathBuf,

    /// Benchmark index symbol.
    #[serde(default = "default_benchmark")]
    pub benchmark: String,

    /// Lookback window length in years.
    #[serde(default = "default_years")]
    pub years: u32,

    /// Directory the report artifacts are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_benchmark() -> String {
    DEFAULT_BENCHMARK.to_string()
}

fn default_years() -> u32 {
    DEFAULT_YEARS
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

impl BacktestConfig {
    /// Minimal config with defaults for everything but the buy list.
    pub fn new(buy_list: impl Into<PathBuf>) -> Self {
        Self {
            buy_list: buy_list.into(),
            benchmark: default_benchmark(),
            years: default_years(),
            output_dir: default_output_dir(),
        }
    }

    /// Load a config from a TOML file.
    pub fn from_toml_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// The evaluation window ending at `today`: `years * 365` days back.
    pub fn window(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), ConfigError> {
        if self.years == 0 {
            return Err(ConfigError::InvalidYears(self.years));
        }
        let start = today - Duration::days(i64::from(self.years) * 365);
        Ok((start, today))
    }

    /// Deterministic hash id for this config over a concrete window.
    pub fn run_id(&self, start: NaiveDate, end: NaiveDate) -> String {
        let payload = serde_json::to_string(&(self, start, end))
            .expect("BacktestConfig serialization failed");
        blake3::hash(payload.as_bytes()).to_hex().to_string()
    }
}
