//! Price provider trait and structured error types.
//!
//! The PriceProvider trait abstracts over market-data sources so the
//! pipeline can be exercised against mocks in tests. The trait is
//! per-symbol; the batched entry point the pipeline uses lives in
//! [`super::fetch`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw daily observation from a provider, before field selection.
///
/// `adj_close` is optional on purpose: some providers (and some response
/// vintages of the same provider) ship only a raw close. Which fields are
/// actually populated is discovered downstream by the table-shape probe,
/// never assumed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBar {
    pub date: NaiveDate,
    pub close: f64,
    pub adj_close: Option<f64>,
}

/// Errors from the data-acquisition layer. All fatal at the pipeline level:
/// there is no retry loop, data acquisition is single-shot.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network unreachable: {0}")]
    Network(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("response format changed: {0}")]
    FormatChanged(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("provider returned no data for any requested symbol")]
    NoData,
}

/// Trait for market-data providers.
///
/// Implementations fetch daily bars for one symbol over a date range. They
/// must not retry internally; the engine treats acquisition as single-shot
/// and surfaces failures immediately.
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider, used in diagnostics.
    fn name(&self) -> &str;

    /// Fetch daily bars for a symbol over an inclusive date range.
    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawBar>, FetchError>;
}

/// Progress callback for multi-symbol fetches.
pub trait FetchProgress: Send {
    /// Called when starting to fetch a symbol.
    fn on_start(&self, symbol: &str, index: usize, total: usize);

    /// Called when a symbol fetch completes.
    fn on_complete(&self, symbol: &str, index: usize, total: usize, result: &Result<(), FetchError>);

    /// Called when the entire batch is done.
    fn on_batch_complete(&self, succeeded: usize, failed: usize, total: usize);
}

/// Simple progress reporter that prints to stdout.
pub struct StdoutProgress;

impl FetchProgress for StdoutProgress {
    fn on_start(&self, symbol: &str, index: usize, total: usize) {
        println!("[{}/{}] Fetching {symbol}...", index + 1, total);
    }

    fn on_complete(
        &self,
        symbol: &str,
        _index: usize,
        _total: usize,
        result: &Result<(), FetchError>,
    ) {
        match result {
            Ok(()) => println!("  OK: {symbol}"),
            Err(e) => println!("  FAIL: {symbol}: {e}"),
        }
    }

    fn on_batch_complete(&self, succeeded: usize, failed: usize, total: usize) {
        println!("Fetch complete: {succeeded}/{total} succeeded, {failed} failed");
    }
}
