//! Price acquisition: provider trait, Yahoo chart API, batch fetch, alignment.

pub mod align;
pub mod fetch;
pub mod provider;
pub mod yahoo;

pub use align::align_symbols;
pub use fetch::{fetch_table, FetchReport};
pub use provider::{FetchError, FetchProgress, PriceProvider, RawBar, StdoutProgress};
pub use yahoo::YahooProvider;
