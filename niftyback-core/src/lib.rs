//! niftyback core — the backtesting engine behind the buy-list advisor.
//!
//! The engine takes a persisted list of candidate tickers, fetches their
//! daily price history alongside a benchmark index, and answers one
//! question: would an equal-weight, buy-and-hold portfolio of the
//! candidates have beaten the index over the lookback window?
//!
//! Stages (strictly sequential, each a pure function over the previous
//! stage's output):
//! - Buy-list loading ([`buylist`])
//! - Price acquisition and alignment ([`data`])
//! - Price-field selection ([`table`])
//! - Gap cleaning ([`clean`])
//! - Base-100 normalization ([`normalize`])
//! - Equal-weight simulation ([`simulate`])
//! - Benchmark comparison ([`compare`])

pub mod advisory;
pub mod buylist;
pub mod clean;
pub mod compare;
pub mod data;
pub mod normalize;
pub mod simulate;
pub mod table;

pub use advisory::Advisory;
pub use buylist::{load_buy_list, BuyListError};
pub use clean::{clean, CleanedPriceTable};
pub use compare::{compare_to_benchmark, BenchmarkComparison, Verdict};
pub use data::fetch::{fetch_table, FetchReport};
pub use data::provider::{FetchError, FetchProgress, PriceProvider, RawBar, StdoutProgress};
pub use data::yahoo::YahooProvider;
pub use normalize::{normalize, NormalizedTable};
pub use simulate::{simulate_equal_weight, NoValidCandidates, StrategySeries};
pub use table::{select_price_field, FieldNotFound, PriceField, RawPriceTable, SelectedPriceTable, TableShape};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything that crosses the runner boundary is
    /// Send + Sync, so a future parallel fetch does not force a retrofit.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<RawBar>();
        require_sync::<RawBar>();
        require_send::<RawPriceTable>();
        require_sync::<RawPriceTable>();
        require_send::<SelectedPriceTable>();
        require_sync::<SelectedPriceTable>();
        require_send::<CleanedPriceTable>();
        require_sync::<CleanedPriceTable>();
        require_send::<NormalizedTable>();
        require_sync::<NormalizedTable>();
        require_send::<StrategySeries>();
        require_sync::<StrategySeries>();
        require_send::<BenchmarkComparison>();
        require_sync::<BenchmarkComparison>();
        require_send::<Advisory>();
        require_sync::<Advisory>();
    }
}
