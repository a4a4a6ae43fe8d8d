//! Shared helpers for reader tests
//!
//! Most tests read from in-memory text; the file-backed ones go through
//! temporary files so the open/close path is covered too.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::config::ReaderConfig;
use crate::error::Result;
use crate::models::{ReadStats, Table};
use crate::reader::TableReader;

mod table_tests;

/// Small well-formed sample with a blank line in the middle
pub fn create_sample_csv() -> String {
    "time, temperature, pressure\n\
     0.0, 21.5, 1013.25\n\
     \n\
     1.0, 21.7, 1013.10\n\
     2.0, 21.9, 1012.95\n"
        .to_string()
}

/// Read `content` with the default comma reader
pub fn read_str(content: &str) -> Result<Table> {
    TableReader::default().read_from(content.as_bytes(), "test.csv")
}

/// Read `content` and keep the statistics
pub fn read_str_with_stats(content: &str) -> Result<(Table, ReadStats)> {
    TableReader::default().read_from_with_stats(content.as_bytes(), "test.csv")
}

/// Read `content` with a custom delimiter
pub fn read_str_with_delimiter(content: &str, delimiter: char) -> Result<Table> {
    TableReader::new(ReaderConfig::new().with_delimiter(delimiter))?
        .read_from(content.as_bytes(), "test.csv")
}

/// Write `content` verbatim to a temporary file
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
