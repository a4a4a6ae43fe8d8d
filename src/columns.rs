//! Column extraction from a loaded [`Table`].
//!
//! Both accessors are pure. Rows too short to hold the requested position
//! contribute nothing, so the result can be shorter than the row count.

use crate::error::{NumCsvError, Result};
use crate::models::Table;

/// Values of the first column whose header equals `name`
pub fn get_column(table: &Table, name: &str) -> Result<Vec<f64>> {
    let index = table
        .column_index(name)
        .ok_or_else(|| NumCsvError::column_not_found(name))?;

    Ok(collect_column(table, index))
}

/// Values at position `index`, which must be below the header count
pub fn get_column_by_index(table: &Table, index: usize) -> Result<Vec<f64>> {
    if index >= table.header_count() {
        return Err(NumCsvError::index_out_of_range(index, table.header_count()));
    }

    Ok(collect_column(table, index))
}

fn collect_column(table: &Table, index: usize) -> Vec<f64> {
    table
        .rows
        .iter()
        .filter_map(|row| row.get(index).copied())
        .collect()
}
