//! Buy-list loading.
//!
//! The upstream selection process persists its candidates as a delimited
//! file with a ticker column. Header casing drifted across versions of
//! that process, so the loader resolves an ordered list of accepted
//! aliases once, up front, instead of sniffing per row.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Accepted ticker-column headers, in preference order. First match wins.
pub const TICKER_HEADER_ALIASES: [&str; 2] = ["ticker", "Ticker"];

/// Errors from buy-list loading. All fatal: the pipeline halts before any
/// network fetch, and no artifacts are written.
#[derive(Debug, Error)]
pub enum BuyListError {
    #[error("buy list not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("buy list has no ticker column (accepted headers: ticker, Ticker)")]
    Schema,

    #[error("buy list has a header but no tickers; nothing to test")]
    Empty,

    #[error("failed to read buy list: {0}")]
    Malformed(String),
}

/// Load the candidate tickers from a CSV buy list.
///
/// Extra columns are ignored. Blank cells are skipped, duplicates are
/// dropped with the first occurrence winning, and the upstream ordering is
/// otherwise preserved.
pub fn load_buy_list(path: &Path) -> Result<Vec<String>, BuyListError> {
    if !path.exists() {
        return Err(BuyListError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| BuyListError::Malformed(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| BuyListError::Malformed(e.to_string()))?
        .clone();

    let column = TICKER_HEADER_ALIASES
        .iter()
        .find_map(|alias| headers.iter().position(|h| h == *alias))
        .ok_or(BuyListError::Schema)?;

    let mut tickers: Vec<String> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| BuyListError::Malformed(e.to_string()))?;
        let Some(cell) = record.get(column) else {
            continue;
        };
        let ticker = cell.trim();
        if ticker.is_empty() {
            continue;
        }
        if !tickers.iter().any(|t| t == ticker) {
            tickers.push(ticker.to_string());
        }
    }

    if tickers.is_empty() {
        return Err(BuyListError::Empty);
    }

    Ok(tickers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn write_fixture(contents: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "niftyback_buylist_{}_{id}.csv",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_lowercase_header() {
        let path = write_fixture("ticker,score\nRELIANCE.NS,9.1\nTCS.NS,8.7\n");
        let tickers = load_buy_list(&path).unwrap();
        assert_eq!(tickers, vec!["RELIANCE.NS", "TCS.NS"]);
    }

    #[test]
    fn loads_capitalized_header() {
        let path = write_fixture("Ticker\nINFY.NS\n");
        let tickers = load_buy_list(&path).unwrap();
        assert_eq!(tickers, vec!["INFY.NS"]);
    }

    #[test]
    fn lowercase_alias_wins_when_both_present() {
        let path = write_fixture("Ticker,ticker\nWRONG.NS,RIGHT.NS\n");
        let tickers = load_buy_list(&path).unwrap();
        assert_eq!(tickers, vec!["RIGHT.NS"]);
    }

    #[test]
    fn missing_column_is_schema_error() {
        let path = write_fixture("symbol,score\nRELIANCE.NS,9.1\n");
        assert!(matches!(load_buy_list(&path), Err(BuyListError::Schema)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = std::env::temp_dir().join("niftyback_does_not_exist.csv");
        assert!(matches!(
            load_buy_list(&path),
            Err(BuyListError::NotFound { .. })
        ));
    }

    #[test]
    fn header_only_file_is_empty() {
        let path = write_fixture("ticker\n");
        assert!(matches!(load_buy_list(&path), Err(BuyListError::Empty)));
    }

    #[test]
    fn duplicates_dropped_first_wins() {
        let path = write_fixture("ticker\nTCS.NS\nINFY.NS\nTCS.NS\n");
        let tickers = load_buy_list(&path).unwrap();
        assert_eq!(tickers, vec!["TCS.NS", "INFY.NS"]);
    }

    #[test]
    fn blank_cells_skipped() {
        let path = write_fixture("ticker\nTCS.NS\n\n  \nINFY.NS\n");
        let tickers = load_buy_list(&path).unwrap();
        assert_eq!(tickers, vec!["TCS.NS", "INFY.NS"]);
    }
}
