//! Gap cleaning.
//!
//! Two failure modes need separating before any arithmetic happens. A
//! symbol that produced nothing at all must disappear entirely, or it
//! would drag an all-gap column into the portfolio mean. A symbol with
//! interior or leading gaps (mismatched exchange holidays, late listings)
//! keeps its column, with gaps filled by carrying the last known value
//! forward and then back-filling whatever leads remain.

use crate::table::SelectedPriceTable;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Gap-free price table. Every retained column has a real value for every
/// date on the axis.
#[derive(Debug, Clone)]
pub struct CleanedPriceTable {
    pub dates: Vec<NaiveDate>,
    /// Retained symbols, in the input order.
    pub symbols: Vec<String>,
    pub columns: HashMap<String, Vec<f64>>,
    /// Symbols removed because their entire history was missing.
    pub dropped: Vec<String>,
}

impl CleanedPriceTable {
    pub fn contains(&self, symbol: &str) -> bool {
        self.columns.contains_key(symbol)
    }
}

/// Drop all-gap columns, then forward-fill and back-fill the rest.
///
/// Does not mutate the input. The postcondition is that no gaps remain in
/// any retained column.
pub fn clean(table: &SelectedPriceTable) -> CleanedPriceTable {
    let mut symbols = Vec::new();
    let mut columns = HashMap::new();
    let mut dropped = Vec::new();

    for symbol in &table.symbols {
        let column = &table.columns[symbol];
        if column.iter().all(|cell| cell.is_none()) {
            dropped.push(symbol.clone());
            continue;
        }

        symbols.push(symbol.clone());
        columns.insert(symbol.clone(), fill_gaps(column));
    }

    CleanedPriceTable {
        dates: table.dates.clone(),
        symbols,
        columns,
        dropped,
    }
}

/// Forward-fill, then back-fill the leading gap.
///
/// Precondition: at least one cell is present (all-gap columns were
/// dropped by the caller), so the result is fully populated.
fn fill_gaps(column: &[Option<f64>]) -> Vec<f64> {
    let mut filled: Vec<f64> = Vec::with_capacity(column.len());
    let mut last: Option<f64> = None;

    for cell in column {
        if let Some(v) = cell {
            last = Some(*v);
        }
        filled.push(last.unwrap_or(f64::NAN));
    }

    // Back-fill the leading gap from the first real observation.
    if let Some(first) = column.iter().find_map(|c| *c) {
        for v in filled.iter_mut() {
            if v.is_nan() {
                *v = first;
            } else {
                break;
            }
        }
    }

    filled
}
