//! Base-100 normalization.
//!
//! Each column is rescaled so its first row equals 100, making relative
//! growth comparable across instruments of different absolute price. A
//! degenerate first value (zero or non-finite) would poison the portfolio
//! mean with NaN or infinity, so such a column is excluded outright
//! instead of being divided through — an explicit per-symbol decision,
//! not a floating-point edge case left to propagate.

use crate::clean::CleanedPriceTable;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Per-symbol series rescaled to start at exactly 100.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub dates: Vec<NaiveDate>,
    /// Symbols that survived normalization, in input order.
    pub symbols: Vec<String>,
    pub columns: HashMap<String, Vec<f64>>,
    /// Symbols excluded because their first price was degenerate.
    pub excluded: Vec<String>,
}

/// Rescale every column to a 100 base: `v / v[0] * 100`.
pub fn normalize(table: &CleanedPriceTable) -> NormalizedTable {
    let mut symbols = Vec::new();
    let mut columns = HashMap::new();
    let mut excluded = Vec::new();

    for symbol in &table.symbols {
        let column = &table.columns[symbol];
        let base = column.first().copied().unwrap_or(f64::NAN);

        if base == 0.0 || !base.is_finite() {
            excluded.push(symbol.clone());
            continue;
        }

        let normalized: Vec<f64> = column.iter().map(|v| v / base * 100.0).collect();
        symbols.push(symbol.clone());
        columns.insert(symbol.clone(), normalized);
    }

    NormalizedTable {
        dates: table.dates.clone(),
        symbols,
        columns,
        excluded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaned(columns: Vec<(&str, Vec<f64>)>) -> CleanedPriceTable {
        let n = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
        let dates = (0..n)
            .map(|i| {
                NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .checked_add_days(chrono::Days::new(i as u64))
                    .unwrap()
            })
            .collect();
        CleanedPriceTable {
            dates,
            symbols: columns.iter().map(|(s, _)| s.to_string()).collect(),
            columns: columns
                .into_iter()
                .map(|(s, c)| (s.to_string(), c))
                .collect(),
            dropped: Vec::new(),
        }
    }

    #[test]
    fn first_row_is_exactly_100() {
        let table = cleaned(vec![
            ("AAA", vec![50.0, 60.0]),
            ("BBB", vec![123.4, 130.0, 99.0]),
        ]);
        let normalized = normalize(&table);
        for symbol in &normalized.symbols {
            assert_eq!(normalized.columns[symbol][0], 100.0);
        }
    }

    #[test]
    fn relative_growth_preserved() {
        let table = cleaned(vec![("AAA", vec![50.0, 60.0])]);
        let normalized = normalize(&table);
        assert_eq!(normalized.columns["AAA"], vec![100.0, 120.0]);
    }

    #[test]
    fn zero_first_price_excludes_symbol() {
        let table = cleaned(vec![
            ("DEGEN", vec![0.0, 5.0]),
            ("AAA", vec![10.0, 11.0]),
        ]);
        let normalized = normalize(&table);
        assert_eq!(normalized.symbols, vec!["AAA"]);
        assert_eq!(normalized.excluded, vec!["DEGEN"]);
    }

    #[test]
    fn no_nan_or_infinity_in_output() {
        let table = cleaned(vec![
            ("DEGEN", vec![0.0, 5.0]),
            ("AAA", vec![10.0, 11.0]),
        ]);
        let normalized = normalize(&table);
        for column in normalized.columns.values() {
            assert!(column.iter().all(|v| v.is_finite()));
        }
    }
}
