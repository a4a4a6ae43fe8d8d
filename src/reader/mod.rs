//! Numeric CSV reader
//!
//! Turns delimiter-separated text whose data cells are all numbers into a
//! [`Table`](crate::models::Table).
//!
//! ## Architecture
//!
//! - [`tokenizer`] - Line splitting and whitespace trimming
//! - [`numeric`] - Token to `f64` conversion with positional errors
//! - [`table`] - Header detection and row assembly
//! - [`mapping`] - Per-row header to value mappings built on [`table`]
//!
//! ## Usage
//!
//! ```no_run
//! use numcsv::reader::read_table;
//!
//! # fn example() -> numcsv::Result<()> {
//! let table = read_table("measurements.csv")?;
//! let pressure = table.column("pressure")?;
//! println!("{} rows, {} pressure values", table.row_count(), pressure.len());
//! # Ok(())
//! # }
//! ```

pub mod mapping;
pub mod numeric;
pub mod table;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

pub use mapping::read_table_as_mappings;
pub use numeric::parse_value;
pub use table::{TableReader, read_table};
pub use tokenizer::{split_tokens, tokenize};
