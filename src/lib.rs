//! numcsv library
//!
//! Reads CSV files whose data cells are all numeric into an in-memory
//! [`Table`] of `f64` values.
//!
//! This library provides tools for:
//! - Tokenizing lines on a single-character delimiter with whitespace trimming
//! - Converting tokens to numbers with row, column and token in every error
//! - Reading whole files into a [`Table`] or into per-row header mappings
//! - Extracting single columns by name or by position

pub mod cli;
pub mod columns;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod reader;

// Re-export commonly used types
pub use columns::{get_column, get_column_by_index};
pub use config::ReaderConfig;
pub use error::{NumCsvError, Result};
pub use models::{ReadStats, RowMapping, Table};
pub use reader::{TableReader, read_table, read_table_as_mappings};
