//! Table reading
//!
//! Reads the header line, then converts every following non-empty line into a
//! row of numbers. The first conversion failure aborts the whole read; no
//! partially built table is ever returned.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

use super::numeric::parse_value;
use super::tokenizer::{split_tokens, tokenize};
use crate::config::ReaderConfig;
use crate::constants::SYNTHETIC_COLUMN_PREFIX;
use crate::error::{NumCsvError, Result};
use crate::models::{ReadStats, Table};

/// Read a comma-separated file into a [`Table`]
pub fn read_table(path: impl AsRef<Path>) -> Result<Table> {
    TableReader::default().read_path(path)
}

/// Reader for numeric delimiter-separated sources
#[derive(Debug, Clone, Default)]
pub struct TableReader {
    config: ReaderConfig,
}

impl TableReader {
    /// Create a reader, rejecting an invalid configuration up front
    pub fn new(config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Read the file at `path`
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Table> {
        self.read_path_with_stats(path).map(|(table, _)| table)
    }

    /// Read the file at `path`, also returning what was seen along the way
    pub fn read_path_with_stats(&self, path: impl AsRef<Path>) -> Result<(Table, ReadStats)> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|e| NumCsvError::source_unavailable(path, e))?;

        // The handle is dropped when this call returns, on success or error
        self.read_from_with_stats(BufReader::new(file), &path.display().to_string())
    }

    /// Read from any buffered source. `source_name` is only used in messages.
    pub fn read_from<R: BufRead>(&self, reader: R, source_name: &str) -> Result<Table> {
        self.read_from_with_stats(reader, source_name)
            .map(|(table, _)| table)
    }

    pub fn read_from_with_stats<R: BufRead>(
        &self,
        mut reader: R,
        source_name: &str,
    ) -> Result<(Table, ReadStats)> {
        info!("Reading numeric CSV: {}", source_name);

        let delimiter = self.config.delimiter;
        let mut stats = ReadStats::new();
        let mut buf = Vec::new();

        // A header that cannot be read counts as an empty source
        let header_line = match read_raw_line(&mut reader, &mut buf) {
            Ok(Some(line)) => line,
            Ok(None) | Err(_) => return Err(NumCsvError::empty_source(source_name)),
        };
        stats.lines_read += 1;

        let headers = tokenize(&header_line, delimiter);
        if headers.is_empty() {
            return Err(NumCsvError::no_headers(source_name));
        }
        debug!("Detected {} headers: {:?}", headers.len(), headers);

        let mut rows = Vec::new();
        while let Some(line) = read_raw_line(&mut reader, &mut buf)? {
            stats.lines_read += 1;
            let line_number = stats.lines_read;

            if line.is_empty() {
                stats.blank_lines_skipped += 1;
                continue;
            }

            let row = parse_row(&line, delimiter, rows.len(), line_number, &headers)?;

            stats.record_row(row.len(), headers.len());
            rows.push(row);
        }

        if stats.ragged_rows() > 0 {
            warn!(
                "{} rows in {} differ from the header width of {} ({} short, {} long)",
                stats.ragged_rows(),
                source_name,
                headers.len(),
                stats.short_rows,
                stats.long_rows
            );
        }

        info!(
            "Read {} rows with {} columns from {}",
            stats.rows_parsed,
            headers.len(),
            source_name
        );
        debug!(
            "Read statistics: lines={}, blank={}, rows={}",
            stats.lines_read, stats.blank_lines_skipped, stats.rows_parsed
        );

        Ok((Table::new(headers, rows), stats))
    }
}

/// Next line without its `\n` or `\r\n`, or `None` at end of input.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so headers always load and a
/// bad data cell fails conversion with its position instead of aborting the read.
fn read_raw_line<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> std::io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Convert one data line into numbers
fn parse_row(
    line: &str,
    delimiter: char,
    row_index: usize,
    line_number: usize,
    headers: &[String],
) -> Result<Vec<f64>> {
    split_tokens(line, delimiter)
        .enumerate()
        .map(|(column_index, token)| {
            let column = column_name(headers, column_index);
            parse_value(token, row_index, line_number, &column)
        })
        .collect()
}

/// Header for `index`, or a synthetic `Column<i>` past the last header
fn column_name(headers: &[String], index: usize) -> Cow<'_, str> {
    match headers.get(index) {
        Some(header) => Cow::Borrowed(header.as_str()),
        None => Cow::Owned(format!("{}{}", SYNTHETIC_COLUMN_PREFIX, index)),
    }
}
