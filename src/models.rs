//! Core data structures produced by a read.
//!
//! A [`Table`] is built once per read and never mutated afterwards. Rows are
//! allowed to be shorter or longer than the header line; the accessors in
//! [`crate::columns`] define how ragged rows are treated.

use crate::columns;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header name to value for a single row
pub type RowMapping = BTreeMap<String, f64>;

/// Header names plus numeric rows, in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Header names from the first line. Not required to be unique.
    pub headers: Vec<String>,

    /// One entry per non-empty data line
    pub rows: Vec<Vec<f64>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        Self { headers, rows }
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first header called `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Values of the named column, skipping rows too short to hold it
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        columns::get_column(self, name)
    }

    /// Values at `index`, skipping rows too short to hold it
    pub fn column_by_index(&self, index: usize) -> Result<Vec<f64>> {
        columns::get_column_by_index(self, index)
    }

    /// Re-shape every row into a header to value mapping.
    ///
    /// Only the first `min(header count, row length)` values of a row are
    /// mapped. When headers repeat, the later column wins.
    pub fn to_mappings(&self) -> Vec<RowMapping> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .zip(row.iter())
                    .map(|(header, value)| (header.clone(), *value))
                    .collect()
            })
            .collect()
    }
}

/// Counters gathered while reading one source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadStats {
    /// Lines consumed, header included
    pub lines_read: usize,

    /// Empty lines after the header that were not turned into rows
    pub blank_lines_skipped: usize,

    /// Rows appended to the table
    pub rows_parsed: usize,

    /// Rows with fewer values than headers
    pub short_rows: usize,

    /// Rows with more values than headers
    pub long_rows: usize,
}

impl ReadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows whose width differs from the header count
    pub fn ragged_rows(&self) -> usize {
        self.short_rows + self.long_rows
    }

    /// Record a parsed row of `width` values against `header_count`
    pub fn record_row(&mut self, width: usize, header_count: usize) {
        self.rows_parsed += 1;
        if width < header_count {
            self.short_rows += 1;
        } else if width > header_count {
            self.long_rows += 1;
        }
    }
}
