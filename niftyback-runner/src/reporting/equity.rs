//! Equity curve export (CSV/Parquet).

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, NamedFrom, ParquetWriter, Series};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::result::EquityPoint;

pub fn write_equity_csv(path: &Path, equity: &[EquityPoint]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("failed to create equity CSV {}", path.display()))?;
    writeln!(file, "date,strategy,benchmark")?;
    for point in equity {
        match point.benchmark {
            Some(b) => writeln!(file, "{},{:.4},{:.4}", point.date, point.strategy, b)?,
            None => writeln!(file, "{},{:.4},", point.date, point.strategy)?,
        }
    }
    Ok(())
}

pub fn write_equity_parquet(path: &Path, equity: &[EquityPoint]) -> Result<()> {
    let dates: Vec<String> = equity.iter().map(|p| p.date.to_string()).collect();
    let strategy: Vec<f64> = equity.iter().map(|p| p.strategy).collect();
    let benchmark: Vec<Option<f64>> = equity.iter().map(|p| p.benchmark).collect();

    let mut df = DataFrame::new(vec![
        Column::Series(Series::new("date".into(), dates).into()),
        Column::Series(Series::new("strategy".into(), strategy).into()),
        Column::Series(Series::new("benchmark".into(), benchmark).into()),
    ])
    .context("failed to build equity dataframe")?;

    let mut file = File::create(path)
        .with_context(|| format!("failed to create equity parquet {}", path.display()))?;
    ParquetWriter::new(&mut file)
        .finish(&mut df)
        .context("failed to write equity parquet")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn points() -> Vec<EquityPoint> {
        vec![
            EquityPoint {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                strategy: 100.0,
                benchmark: Some(100.0),
            },
            EquityPoint {
                date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
                strategy: 115.0,
                benchmark: Some(95.0),
            },
        ]
    }

    #[test]
    fn csv_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("equity.csv");
        write_equity_csv(&path, &points()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("date,strategy,benchmark"));
        assert_eq!(lines.next(), Some("2024-01-02,100.0000,100.0000"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn csv_leaves_benchmark_blank_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("equity.csv");
        let mut pts = points();
        for p in &mut pts {
            p.benchmark = None;
        }
        write_equity_csv(&path, &pts).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("2024-01-02,100.0000,\n"));
    }

    #[test]
    fn parquet_written_non_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("equity.parquet");
        write_equity_parquet(&path, &points()).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
