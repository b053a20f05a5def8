//! Non-fatal advisories.
//!
//! An advisory degrades output quality without halting the pipeline. They
//! are collected on the run result so callers can detect degraded runs
//! programmatically, and rendered in the text summary.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// The adjusted close was unavailable; the raw close was used instead.
    /// Returns ignore dividends and splits in this mode.
    FallbackPriceField,

    /// The benchmark symbol produced no usable data; the comparison and
    /// verdict are skipped, the strategy return is still computed.
    BenchmarkMissing { symbol: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::FallbackPriceField => {
                write!(f, "adjusted close missing; using raw close for calculations")
            }
            Advisory::BenchmarkMissing { symbol } => {
                write!(f, "benchmark ({symbol}) missing; comparison skipped")
            }
        }
    }
}
