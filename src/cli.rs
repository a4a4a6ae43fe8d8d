//! Command-line interface components.

use crate::config::ReaderConfig;
use crate::constants::{DEFAULT_DELIMITER, DEFAULT_LOG_LEVEL, VERBOSE_LOG_LEVEL};
use crate::error::NumCsvError;
use crate::models::{ReadStats, RowMapping, Table};
use crate::reader::TableReader;
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "numcsv")]
#[command(about = "Read an all-numeric CSV file and print its shape, a column, or row mappings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the CSV file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Print the values of the first column with this header
    #[arg(short, long, conflicts_with_all = ["index", "mappings"])]
    pub column: Option<String>,

    /// Print the values of the column at this zero-based position
    #[arg(short, long, conflicts_with = "mappings")]
    pub index: Option<usize>,

    /// Print every row as header=value pairs
    #[arg(short, long)]
    pub mappings: bool,

    /// Field delimiter
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn reader_config(&self) -> ReaderConfig {
        ReaderConfig::new().with_delimiter(self.delimiter)
    }

    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            VERBOSE_LOG_LEVEL
        } else {
            DEFAULT_LOG_LEVEL
        }
    }
}

/// Set up structured logging on stderr. `RUST_LOG` takes precedence.
///
/// Quiet mode uses the compact formatter; otherwise lines carry the time since start.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{
        EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    };

    let log_level = args.log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("numcsv={}", log_level)));

    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let stderr_layer: Box<dyn Layer<Registry> + Send + Sync> = if args.quiet {
        stderr_layer.compact().boxed()
    } else {
        stderr_layer.with_timer(fmt::time::uptime()).boxed()
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Read the file named in `args` and print the requested view to stdout
pub fn run(args: &Args) -> Result<()> {
    let reader = TableReader::new(args.reader_config()).context("Invalid reader settings")?;
    let (table, stats) = reader
        .read_path_with_stats(&args.path)
        .map_err(|e| {
            let context = read_failure_context(&args.path, &e);
            anyhow::Error::new(e).context(context)
        })?;

    let output = if let Some(name) = &args.column {
        render_column(&table.column(name)?)
    } else if let Some(index) = args.index {
        render_column(&table.column_by_index(index)?)
    } else if args.mappings {
        render_mappings(&table.to_mappings())
    } else {
        render_summary(&args.path, &table, &stats)
    };

    print!("{}", output);
    Ok(())
}

/// Lead-in for a failed read: bad cell values point at the data, not the file
pub fn read_failure_context(path: &Path, error: &NumCsvError) -> String {
    if error.is_conversion_error() {
        format!("Bad value in {}", path.display())
    } else {
        format!("Failed to read {}", path.display())
    }
}

/// Coloured overview of headers and read statistics
pub fn render_summary(path: &Path, table: &Table, stats: &ReadStats) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        "File:".bright_cyan(),
        path.display().to_string().bright_white()
    ));
    out.push_str(&format!(
        "  {} {}\n",
        "Columns:".bright_cyan(),
        table.header_count().to_string().bright_white().bold()
    ));
    out.push_str(&format!(
        "  {} {}\n",
        "Rows:".bright_cyan(),
        table.row_count().to_string().bright_white().bold()
    ));
    out.push_str(&format!(
        "  {} {}\n",
        "Blank lines skipped:".bright_cyan(),
        stats.blank_lines_skipped
    ));
    if stats.ragged_rows() > 0 {
        out.push_str(&format!(
            "  {} {} short, {} long\n",
            "Ragged rows:".bright_yellow(),
            stats.short_rows,
            stats.long_rows
        ));
    }

    out.push_str(&format!("\n{}\n", "Headers".bright_green().bold()));
    for (index, header) in table.headers.iter().enumerate() {
        out.push_str(&format!("  {:>3}  {}\n", index, header));
    }
    out
}

/// One value per line
pub fn render_column(values: &[f64]) -> String {
    values.iter().map(|value| format!("{}\n", value)).collect()
}

/// One row per line, `header=value` pairs separated by commas
pub fn render_mappings(mappings: &[RowMapping]) -> String {
    mappings
        .iter()
        .map(|mapping| {
            let pairs: Vec<String> = mapping
                .iter()
                .map(|(header, value)| format!("{}={}", header, value))
                .collect();
            format!("{}\n", pairs.join(", "))
        })
        .collect()
}
