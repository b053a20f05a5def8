//! Price tables and price-field selection.
//!
//! Upstream providers do not agree on column structure: a single-symbol
//! request may come back as a flat table of price fields, a multi-symbol
//! request as a layered field-by-symbol grid, and the adjusted close may
//! or may not be present at all. Rather than branching on ad-hoc
//! structural checks, the table exposes an explicit capability probe
//! ([`RawPriceTable::shape`]) and the selector dispatches on its result.

use crate::advisory::Advisory;
use crate::data::provider::RawBar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Price fields a provider may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    /// Dividend/split-adjusted close. Preferred for return calculations.
    AdjClose,
    /// Raw close. Fallback when the adjusted field is absent.
    Close,
}

impl PriceField {
    pub fn label(self) -> &'static str {
        match self {
            PriceField::AdjClose => "adjusted close",
            PriceField::Close => "close",
        }
    }
}

/// Column structure of a raw table, discovered by probing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableShape {
    /// One row of field names (single-symbol responses).
    Flat { fields: Vec<PriceField> },
    /// Two levels: price field by symbol (multi-symbol responses).
    Layered {
        fields: Vec<PriceField>,
        symbols: Vec<String>,
    },
}

impl TableShape {
    pub fn fields(&self) -> &[PriceField] {
        match self {
            TableShape::Flat { fields } => fields,
            TableShape::Layered { fields, .. } => fields,
        }
    }
}

/// Raw provider output aligned to a common date axis.
///
/// Invariant: every column in `cells` has the same length as `dates`.
/// A `None` cell is a gap (the symbol had no observation on that date).
#[derive(Debug, Clone)]
pub struct RawPriceTable {
    /// Common date axis, sorted ascending.
    pub dates: Vec<NaiveDate>,
    /// Symbols in requested order.
    pub symbols: Vec<String>,
    /// Per-symbol bars aligned to `dates`.
    pub cells: HashMap<String, Vec<Option<RawBar>>>,
}

impl RawPriceTable {
    /// Probe the column structure: which price fields are actually
    /// populated, and whether the table is flat or layered.
    ///
    /// A field counts as present when at least one cell anywhere carries a
    /// finite value for it. Per-cell holes are handled by the cleaner, not
    /// here.
    pub fn shape(&self) -> TableShape {
        let bars = || self.cells.values().flatten().flatten();

        let mut fields = Vec::new();
        if bars().any(|b| b.adj_close.is_some_and(f64::is_finite)) {
            fields.push(PriceField::AdjClose);
        }
        if bars().any(|b| b.close.is_finite()) {
            fields.push(PriceField::Close);
        }

        if self.symbols.len() == 1 {
            TableShape::Flat { fields }
        } else {
            TableShape::Layered {
                fields,
                symbols: self.symbols.clone(),
            }
        }
    }
}

/// One price field applied uniformly across all symbols.
///
/// Invariant: exactly one field choice, never mixed across symbols.
#[derive(Debug, Clone)]
pub struct SelectedPriceTable {
    /// The field every column was read from.
    pub field: PriceField,
    pub dates: Vec<NaiveDate>,
    pub symbols: Vec<String>,
    /// Per-symbol prices aligned to `dates`; `None` is a gap.
    pub columns: HashMap<String, Vec<Option<f64>>>,
}

/// Neither the adjusted close nor the raw close exists under either table
/// shape. Fatal: there is nothing to compute returns from.
#[derive(Debug, Error)]
#[error("neither an adjusted close nor a raw close field is present in the price data")]
pub struct FieldNotFound;

/// Pick the single price field used for all downstream computation.
///
/// Preference order: adjusted close, then raw close. The fallback is
/// non-fatal but emits [`Advisory::FallbackPriceField`] so callers can
/// detect that a lower-fidelity field was used.
pub fn select_price_field(
    table: &RawPriceTable,
) -> Result<(SelectedPriceTable, Option<Advisory>), FieldNotFound> {
    let shape = table.shape();

    let (field, advisory) = if shape.fields().contains(&PriceField::AdjClose) {
        (PriceField::AdjClose, None)
    } else if shape.fields().contains(&PriceField::Close) {
        (PriceField::Close, Some(Advisory::FallbackPriceField))
    } else {
        return Err(FieldNotFound);
    };

    let mut columns = HashMap::new();
    for symbol in &table.symbols {
        let cells = &table.cells[symbol];
        let column: Vec<Option<f64>> = cells
            .iter()
            .map(|cell| {
                cell.as_ref()
                    .and_then(|bar| match field {
                        PriceField::AdjClose => bar.adj_close,
                        PriceField::Close => Some(bar.close),
                    })
                    .filter(|v| v.is_finite())
            })
            .collect();
        columns.insert(symbol.clone(), column);
    }

    Ok((
        SelectedPriceTable {
            field,
            dates: table.dates.clone(),
            symbols: table.symbols.clone(),
            columns,
        },
        advisory,
    ))
}
