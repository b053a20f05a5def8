//! Equal-weight strategy simulation.
//!
//! The strategy is static: identical capital shares in every candidate at
//! the window start, never rebalanced. On the base-100 scale that is just
//! the arithmetic mean of the normalized candidate columns per date.

use crate::normalize::NormalizedTable;
use chrono::NaiveDate;
use thiserror::Error;

/// Every candidate symbol failed to produce usable data. Fatal: there is
/// nothing to simulate.
#[derive(Debug, Error)]
#[error("no candidate produced usable price data; nothing to simulate")]
pub struct NoValidCandidates;

/// Equal-weight portfolio value over time, on the same 100 base as the
/// per-symbol series.
#[derive(Debug, Clone)]
pub struct StrategySeries {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
    /// Candidates that actually contributed to the mean.
    pub members: Vec<String>,
}

impl StrategySeries {
    /// Final strategy return in percentage points of growth over the
    /// window (the base is 100, so this is simply `last - 100`).
    pub fn total_return_pct(&self) -> f64 {
        self.values.last().map(|v| v - 100.0).unwrap_or(0.0)
    }
}

/// Average the normalized series of the candidates that survived cleaning
/// and normalization.
///
/// `candidates` is the requested buy list; the valid subset is its
/// intersection with the normalized table's columns. Symbols that failed
/// entirely were already dropped upstream and simply don't contribute.
pub fn simulate_equal_weight(
    table: &NormalizedTable,
    candidates: &[String],
) -> Result<StrategySeries, NoValidCandidates> {
    let members: Vec<String> = candidates
        .iter()
        .filter(|c| table.columns.contains_key(*c))
        .cloned()
        .collect();

    if members.is_empty() || table.dates.is_empty() {
        return Err(NoValidCandidates);
    }

    let n = table.dates.len();
    let mut values = vec![0.0; n];
    for member in &members {
        for (i, v) in table.columns[member].iter().enumerate() {
            values[i] += v;
        }
    }
    for v in values.iter_mut() {
        *v /= members.len() as f64;
    }

    Ok(StrategySeries {
        dates: table.dates.clone(),
        values,
        members,
    })
}
