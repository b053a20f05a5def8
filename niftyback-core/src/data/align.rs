//! Multi-symbol time alignment.
//!
//! Exchanges disagree on holidays and listings start mid-window, so the
//! per-symbol histories rarely share a date axis. Alignment puts every
//! symbol on the union of all observed dates; missing observations become
//! explicit gaps (`None`), never fabricated prices. Gap filling is the
//! cleaner's job, after field selection.

use super::provider::RawBar;
use crate::table::RawPriceTable;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

/// Align per-symbol bar histories to a common date axis.
///
/// `order` fixes the column order of the result (requested order, so runs
/// are deterministic); symbols without any bars are skipped entirely.
pub fn align_symbols(
    symbol_bars: HashMap<String, Vec<RawBar>>,
    order: &[String],
) -> RawPriceTable {
    let mut all_dates = BTreeSet::new();
    for bars in symbol_bars.values() {
        for bar in bars {
            all_dates.insert(bar.date);
        }
    }
    let dates: Vec<NaiveDate> = all_dates.into_iter().collect();

    let symbols: Vec<String> = order
        .iter()
        .filter(|s| symbol_bars.contains_key(*s))
        .cloned()
        .collect();

    let mut cells: HashMap<String, Vec<Option<RawBar>>> = HashMap::new();
    for symbol in &symbols {
        let mut by_date: HashMap<NaiveDate, &RawBar> = HashMap::new();
        for bar in &symbol_bars[symbol] {
            by_date.insert(bar.date, bar);
        }

        let column: Vec<Option<RawBar>> = dates
            .iter()
            .map(|date| by_date.get(date).map(|b| (*b).clone()))
            .collect();

        cells.insert(symbol.clone(), column);
    }

    RawPriceTable {
        dates,
        symbols,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(date: &str, close: f64) -> RawBar {
        RawBar {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            close,
            adj_close: Some(close),
        }
    }

    #[test]
    fn union_axis_with_gaps() {
        let mut input = HashMap::new();
        input.insert(
            "AAA".to_string(),
            vec![
                bar("2024-01-02", 100.0),
                bar("2024-01-03", 101.0),
                bar("2024-01-04", 102.0),
            ],
        );
        input.insert(
            "BBB".to_string(),
            vec![
                bar("2024-01-02", 200.0),
                // BBB missing 2024-01-03 (exchange holiday)
                bar("2024-01-04", 202.0),
            ],
        );

        let order = vec!["AAA".to_string(), "BBB".to_string()];
        let table = align_symbols(input, &order);

        assert_eq!(table.dates.len(), 3);
        assert_eq!(table.symbols, order);
        assert_eq!(table.cells["AAA"].len(), 3);
        assert_eq!(table.cells["BBB"].len(), 3);
        assert_eq!(table.cells["AAA"][1].as_ref().unwrap().close, 101.0);
        assert!(table.cells["BBB"][1].is_none());
    }

    #[test]
    fn axis_is_sorted_ascending() {
        let mut input = HashMap::new();
        input.insert(
            "AAA".to_string(),
            vec![bar("2024-01-04", 1.0), bar("2024-01-02", 2.0)],
        );

        let table = align_symbols(input, &["AAA".to_string()]);
        assert!(table.dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn symbols_without_bars_are_skipped() {
        let mut input = HashMap::new();
        input.insert("AAA".to_string(), vec![bar("2024-01-02", 1.0)]);

        let order = vec!["AAA".to_string(), "GONE".to_string()];
        let table = align_symbols(input, &order);
        assert_eq!(table.symbols, vec!["AAA"]);
        assert!(!table.cells.contains_key("GONE"));
    }
}
