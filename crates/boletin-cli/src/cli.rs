//! CLI argument definitions for the bulletin tool.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `prices` | Locate the latest bulletin and print its price rows |
//! | `url` | Print the candidate bulletin URL for a date |
//! | `parse` | Parse a bulletin PDF already on disk |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | env or `15000` | Per-fetch timeout in ms |
//! | `--max-attempts` | env or `5` | Walk-back budget |
//! | `--base-url` | env or publisher host | Publisher origin |
//! | `--verbose` | `false` | Debug logging on stderr |
//!
//! # Examples
//!
//! ```bash
//! # Latest prices for potatoes and tomatoes
//! boletin prices --products "papa,tomate" --pretty
//!
//! # A specific day, as a table
//! boletin prices --date 20240105 --format table
//!
//! # Inspect a downloaded bulletin
//! boletin parse Boletin_diario_20240105.pdf --products papa
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Daily wholesale price bulletin fetcher
#[derive(Debug, Parser)]
#[command(
    name = "boletin",
    author,
    version,
    about = "Fetch and parse the daily wholesale market price bulletin"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Per-fetch timeout in milliseconds (overrides BOLETIN_TIMEOUT_MS).
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Maximum number of dates to try (overrides BOLETIN_MAX_ATTEMPTS).
    #[arg(long, global = true)]
    pub max_attempts: Option<u32>,

    /// Publisher origin (overrides BOLETIN_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Enable debug logging on stderr. `RUST_LOG` takes precedence.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON object output.
    Json,
    /// Aligned columns for terminal display.
    Table,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the bulletin for a date (or the latest business day) and print its rows.
    ///
    /// # Examples
    ///
    ///   boletin prices
    ///   boletin prices --date 20240105 --products papa
    Prices(PricesArgs),

    /// Print the bulletin URL the locator would try first for a date.
    Url(UrlArgs),

    /// Extract and parse a bulletin PDF from disk without any network access.
    Parse(ParseArgs),
}

/// Arguments for the `prices` command.
#[derive(Debug, Args)]
pub struct PricesArgs {
    /// Target date as YYYYMMDD. Anything else means "latest business day".
    #[arg(long)]
    pub date: Option<String>,

    /// Comma-separated product name prefixes (case and accent insensitive).
    #[arg(long)]
    pub products: Option<String>,

    /// Abort the whole lookup after this many milliseconds.
    #[arg(long)]
    pub deadline_ms: Option<u64>,

    /// Pin "today" as YYYYMMDD instead of reading the system clock.
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for the `url` command.
#[derive(Debug, Args)]
pub struct UrlArgs {
    /// Date as YYYYMMDD; defaults to today. Weekends roll back to Friday.
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `parse` command.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Path to a bulletin PDF.
    pub path: PathBuf,

    /// Comma-separated product name prefixes.
    #[arg(long)]
    pub products: Option<String>,

    /// Print the extracted text instead of parsed rows.
    #[arg(long, default_value_t = false)]
    pub text: bool,
}
