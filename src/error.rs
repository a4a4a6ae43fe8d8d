//! Error handling for numeric CSV reading.
//!
//! Every failure mode of a read or a column lookup is a distinct variant so
//! callers can match on it. Conversion errors carry the 1-based row number,
//! the file line, the column name, and the offending token.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumCsvError {
    #[error("Could not open file {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is empty or could not read header: {source_name}")]
    EmptySource { source_name: String },

    #[error("No headers found in {source_name}")]
    NoHeaders { source_name: String },

    #[error("Invalid number format in row {row} (line {line}), column '{column}': '{token}'")]
    InvalidFormat {
        row: usize,
        line: usize,
        column: String,
        token: String,
    },

    #[error("Number out of range in row {row} (line {line}), column '{column}': '{token}'")]
    OutOfRange {
        row: usize,
        line: usize,
        column: String,
        token: String,
    },

    #[error("Column '{name}' not found")]
    ColumnNotFound { name: String },

    #[error("Column index {index} out of range ({column_count} columns)")]
    IndexOutOfRange { index: usize, column_count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl NumCsvError {
    /// Create a source unavailable error for a path that failed to open
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn empty_source(source_name: impl Into<String>) -> Self {
        Self::EmptySource {
            source_name: source_name.into(),
        }
    }

    pub fn no_headers(source_name: impl Into<String>) -> Self {
        Self::NoHeaders {
            source_name: source_name.into(),
        }
    }

    /// Create an invalid format error. `row_index` is zero-based.
    pub fn invalid_format(
        row_index: usize,
        line: usize,
        column: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            row: row_index + 1,
            line,
            column: column.into(),
            token: token.into(),
        }
    }

    /// Create an out of range error. `row_index` is zero-based.
    pub fn out_of_range(
        row_index: usize,
        line: usize,
        column: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            row: row_index + 1,
            line,
            column: column.into(),
            token: token.into(),
        }
    }

    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }

    pub fn index_out_of_range(index: usize, column_count: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            column_count,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error was raised while converting a single token
    pub fn is_conversion_error(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. } | Self::OutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, NumCsvError>;
