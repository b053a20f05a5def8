//! Batch fetch — the pipeline's single acquisition step.
//!
//! Loops over the requested symbols (candidates plus benchmark), tolerates
//! per-symbol failures, and aligns whatever arrived onto a common date
//! axis. A symbol that fails is simply absent from the resulting table;
//! the cleaner and the simulator decide what that means downstream. Only
//! when nothing at all arrives does the whole fetch fail.

use super::align::align_symbols;
use super::provider::{FetchError, FetchProgress, PriceProvider, RawBar};
use crate::table::RawPriceTable;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Outcome of a batch fetch: the aligned table plus per-symbol failures.
#[derive(Debug)]
pub struct FetchReport {
    pub table: RawPriceTable,
    /// Symbols that produced no data, with the reason.
    pub failures: Vec<(String, FetchError)>,
}

/// Fetch all requested symbols over the window and align them.
///
/// Fails with [`FetchError::NoData`] only when every symbol failed; any
/// partial result is passed downstream as-is.
pub fn fetch_table(
    provider: &dyn PriceProvider,
    symbols: &[String],
    start: NaiveDate,
    end: NaiveDate,
    progress: Option<&dyn FetchProgress>,
) -> Result<FetchReport, FetchError> {
    let total = symbols.len();
    let mut per_symbol: HashMap<String, Vec<RawBar>> = HashMap::new();
    let mut failures: Vec<(String, FetchError)> = Vec::new();

    for (i, symbol) in symbols.iter().enumerate() {
        if let Some(p) = progress {
            p.on_start(symbol, i, total);
        }

        let result = match provider.fetch(symbol, start, end) {
            Ok(bars) if bars.is_empty() => Err(FetchError::SymbolNotFound {
                symbol: symbol.clone(),
            }),
            other => other,
        };

        match result {
            Ok(bars) => {
                if let Some(p) = progress {
                    p.on_complete(symbol, i, total, &Ok(()));
                }
                per_symbol.insert(symbol.clone(), bars);
            }
            Err(e) => {
                if let Some(p) = progress {
                    p.on_complete(symbol, i, total, &Err(clone_reason(&e)));
                }
                failures.push((symbol.clone(), e));
            }
        }
    }

    if let Some(p) = progress {
        p.on_batch_complete(per_symbol.len(), failures.len(), total);
    }

    if per_symbol.is_empty() {
        return Err(FetchError::NoData);
    }

    Ok(FetchReport {
        table: align_symbols(per_symbol, symbols),
        failures,
    })
}

/// FetchError is not Clone (it can wrap I/O detail), so rebuild an
/// equivalent value for the progress callback.
fn clone_reason(e: &FetchError) -> FetchError {
    match e {
        FetchError::Network(s) => FetchError::Network(s.clone()),
        FetchError::SymbolNotFound { symbol } => FetchError::SymbolNotFound {
            symbol: symbol.clone(),
        },
        FetchError::FormatChanged(s) => FetchError::FormatChanged(s.clone()),
        FetchError::Provider(s) => FetchError::Provider(s.clone()),
        FetchError::NoData => FetchError::NoData,
    }
}
