//! CLI argument definitions for tickerlens.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `search` | Fetch a company snapshot (identity, fundamentals, metrics) |
//! | `chart` | Fetch and downsample the historical price series |
//! | `status` | Report connectivity state; `--reset` recovers manually |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--base-url` | env | Data service base URL |
//! | `--timeout-ms` | `30000` | Request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! # Look up a company
//! tickerlens search AAPL --pretty
//!
//! # Chart-ready series, bounded to 50 points
//! tickerlens chart AAPL --max-points 50
//!
//! # Recover after a lost connection
//! tickerlens status --reset
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Equity fundamentals and price history from a company-info service.
#[derive(Debug, Parser)]
#[command(
    name = "tickerlens",
    author,
    version,
    about = "Equity fundamentals and price history CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Data service base URL; overrides the TICKERLENS_API_URL variable.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = tickerlens_core::DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the company snapshot for a ticker.
    Search(SearchArgs),
    /// Fetch the price series for a ticker, reduced for display.
    Chart(ChartArgs),
    /// Report connectivity state.
    Status(StatusArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Ticker symbol to look up.
    pub ticker: String,
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Ticker symbol to chart.
    pub ticker: String,

    /// Maximum number of chart points to keep.
    #[arg(long, default_value_t = tickerlens_core::DEFAULT_MAX_POINTS)]
    pub max_points: usize,
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Clear any displayed error and mark connectivity online again.
    #[arg(long, default_value_t = false)]
    pub reset: bool,
}
