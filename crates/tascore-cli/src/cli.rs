//! CLI argument definitions for tascore.
//!
//! This module contains the command-line interface structure using Clap.
//! The CLI scores locally supplied price histories; it never fetches data
//! itself.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `score` | Score a price history and print the signal report |
//! | `classify` | Map a composite score to its signal label |
//! | `weights` | Print the indicator weight and threshold table |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//!
//! # Examples
//!
//! ```bash
//! # Score a year of daily bars
//! tascore score AAPL --bars aapl_1y.json
//!
//! # Pipe bars from another tool
//! fetch-bars AAPL | tascore score AAPL --bars -
//!
//! # Bucket a composite score
//! tascore classify -- -54.2
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// tascore - technical indicator scoring CLI
///
/// Computes a battery of classical technical indicators over a daily OHLCV
/// history, normalizes each into a bounded directional score, and
/// aggregates them into a single composite signal.
#[derive(Debug, Parser)]
#[command(
    name = "tascore",
    author,
    version,
    about = "Technical indicator scoring CLI",
    long_about = "tascore scores a chronological OHLCV price history with a battery of \
classical technical indicators:\n\
\n\
  • Moving averages (10/20/50/200), RSI, MACD, Bollinger Bands\n\
  • Stochastic oscillator, OBV momentum, multi-horizon price momentum\n\
  • One composite score in [-100, 100] with a seven-bucket signal label\n\
\n\
Negative scores lean buy, positive lean sell. The CLI performs no network \
I/O; price history is supplied as a local JSON file or on stdin.\n\
\n\
Use 'tascore <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: Single JSON envelope (default)
    /// - table: Human-readable breakdown
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    ///
    /// Useful for CI/CD pipelines that need strict validation.
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable breakdown for terminal display.
    Table,
    /// Single JSON envelope output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 📊 Score a price history.
    ///
    /// Reads a JSON array of daily OHLCV bars, runs the full indicator
    /// battery, and prints the composite signal with its per-indicator
    /// breakdown.
    ///
    /// # Examples
    ///
    ///   tascore score AAPL --bars aapl_1y.json
    ///   tascore score MSFT --bars - --name "Microsoft" --sector Technology
    Score(ScoreArgs),

    /// 🏷️ Map a composite score to its signal label.
    ///
    /// # Examples
    ///
    ///   tascore classify 35.5
    ///   tascore classify -- -82
    Classify(ClassifyArgs),

    /// ⚖️ Print the indicator weight and threshold table.
    ///
    /// Shows the composite weights, per-window moving-average weights, and
    /// the scale factors behind every normalized score.
    Weights,
}

/// Arguments for the `score` command.
#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Market symbol the history belongs to (e.g., AAPL).
    pub symbol: String,

    /// Path to a JSON array of daily bars, or '-' for stdin.
    ///
    /// Each element: {"date": "YYYY-MM-DD", "open": .., "high": ..,
    /// "low": .., "close": .., "volume": ..}. Bars must be oldest first.
    #[arg(long)]
    pub bars: PathBuf,

    /// Company name to echo in the report.
    #[arg(long)]
    pub name: Option<String>,

    /// Sector to echo in the report.
    #[arg(long)]
    pub sector: Option<String>,

    /// Market capitalization to echo in the report.
    #[arg(long)]
    pub market_cap: Option<f64>,

    /// Trailing P/E ratio to echo in the report.
    #[arg(long)]
    pub pe_ratio: Option<f64>,

    /// Dividend yield (percent) to echo in the report.
    #[arg(long)]
    pub dividend_yield: Option<f64>,
}

/// Arguments for the `classify` command.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Composite score in [-100, 100].
    #[arg(allow_hyphen_values = true)]
    pub score: f64,
}
