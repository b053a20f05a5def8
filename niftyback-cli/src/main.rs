//! niftyback CLI — backtest a buy list against a benchmark index.
//!
//! Commands:
//! - `run` — execute the full pipeline and write the report artifacts
//! - `check` — validate a buy list without touching the network

use anyhow::{bail, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use niftyback_core::{load_buy_list, StdoutProgress, YahooProvider};
use niftyback_runner::reporting::render_summary;
use niftyback_runner::{run_backtest, write_artifacts, BacktestConfig};

#[derive(Parser)]
#[command(
    name = "niftyback",
    about = "Backtest an equal-weight buy list against a benchmark index"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the backtest and write the chart, summary, and equity artifacts.
    Run {
        /// Path to the buy-list CSV (column `ticker` or `Ticker`).
        buy_list: Option<PathBuf>,

        /// Path to a TOML config file; flags override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Lookback window in years.
        #[arg(long)]
        years: Option<u32>,

        /// Benchmark index symbol.
        #[arg(long)]
        benchmark: Option<String>,

        /// Output directory for the report artifacts.
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Suppress per-symbol fetch progress.
        #[arg(long, default_value_t = false)]
        quiet: bool,
    },
    /// Validate a buy list and print its tickers, without fetching anything.
    Check {
        /// Path to the buy-list CSV.
        buy_list: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            buy_list,
            config,
            years,
            benchmark,
            output_dir,
            quiet,
        } => run(buy_list, config, years, benchmark, output_dir, quiet),
        Commands::Check { buy_list } => check(buy_list),
    }
}

fn run(
    buy_list: Option<PathBuf>,
    config_path: Option<PathBuf>,
    years: Option<u32>,
    benchmark: Option<String>,
    output_dir: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let mut config = match (config_path, buy_list) {
        (Some(path), buy_list) => {
            let mut config = BacktestConfig::from_toml_path(&path)?;
            if let Some(list) = buy_list {
                config.buy_list = list;
            }
            config
        }
        (None, Some(list)) => BacktestConfig::new(list),
        (None, None) => bail!("either a buy-list path or --config is required"),
    };

    if let Some(years) = years {
        config.years = years;
    }
    if let Some(benchmark) = benchmark {
        config.benchmark = benchmark;
    }
    if let Some(output_dir) = output_dir {
        config.output_dir = output_dir;
    }

    let provider = YahooProvider::new();
    let progress = StdoutProgress;
    let today = Utc::now().date_naive();

    let run = run_backtest(
        &config,
        &provider,
        (!quiet).then_some(&progress as &dyn niftyback_core::FetchProgress),
        today,
    )?;

    print!("{}", render_summary(&run.summary));

    let paths = write_artifacts(&run, &config.output_dir)?;
    println!("Chart saved to: {}", paths.chart_svg.display());
    println!("Summary saved to: {}", paths.summary_json.display());

    Ok(())
}

fn check(buy_list: PathBuf) -> Result<()> {
    let tickers = load_buy_list(&buy_list)?;
    println!("{} tickers:", tickers.len());
    for ticker in &tickers {
        println!("  {ticker}");
    }
    Ok(())
}
