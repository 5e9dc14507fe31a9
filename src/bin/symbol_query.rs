//! Query the symbol catalog from the command line.
//!
//! Usage:
//!   symbol-query --search star
//!   symbol-query --limit weather,nature --category nature
//!   symbol-query --available-on "iOS 14.0" --names
//!   symbol-query --categories
//!
//! Symbols print as NDJSON (one object per line) unless `--names` is given.
//! Logs go to stderr so stdout stays machine-readable.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use symbolpicker::{
    CategoryFilter, DATA_DIR_ENV, OsVersion, Query, find_data_dir, load_dir, parse_category_list,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "symbol-query")]
#[command(about = "Filter and search the symbol catalog")]
struct Cli {
    /// Directory holding name_availability.json and friends.
    #[arg(long, env = DATA_DIR_ENV)]
    data: Option<PathBuf>,
    /// Selected category key, or "all".
    #[arg(long, default_value = "all")]
    category: CategoryFilter,
    /// Restrict to these category keys (comma or space separated).
    #[arg(long)]
    limit: Option<String>,
    /// Case-insensitive substring matched against names and search terms.
    #[arg(long, default_value = "")]
    search: String,
    /// Only symbols available on this release, e.g. "iOS 14.0".
    #[arg(long)]
    available_on: Option<OsVersion>,
    /// List the categories in use instead of symbols.
    #[arg(long)]
    categories: bool,
    /// Print one symbol name per line instead of JSON.
    #[arg(long)]
    names: bool,
    /// Default log level; RUST_LOG overrides when set.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let data_dir = find_data_dir(cli.data.as_deref())?;
    debug!(data_dir = %data_dir.display(), "loading symbol metadata");
    let catalog = load_dir(&data_dir)
        .with_context(|| format!("loading symbol catalog from {}", data_dir.display()))?;

    let limited = match cli.limit.as_deref() {
        Some(raw) => parse_category_list(raw).context("parsing --limit")?,
        None => Vec::new(),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.categories {
        let limited = limited.into_iter().collect();
        for category in catalog.available_categories(&limited) {
            if cli.names {
                writeln!(out, "{}", category.key)?;
            } else {
                writeln!(out, "{}", serde_json::to_string(&category)?)?;
            }
        }
        out.flush()?;
        return Ok(());
    }

    let mut query = Query::new()
        .limited_to(limited)
        .selected(cli.category)
        .search(cli.search);
    query.available_on = cli.available_on;

    let mut matched = 0usize;
    for symbol in catalog.query(&query) {
        matched += 1;
        if cli.names {
            writeln!(out, "{}", symbol.name)?;
        } else {
            writeln!(out, "{}", serde_json::to_string(symbol)?)?;
        }
    }
    out.flush()?;
    debug!(matched, total = catalog.len(), "query complete");
    Ok(())
}

fn initialize_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
