//! Row mappings built on top of the table reader

use std::io::BufRead;
use std::path::Path;
use tracing::debug;

use super::table::TableReader;
use crate::error::Result;
use crate::models::RowMapping;

/// Read a comma-separated file and return one header to value mapping per row.
///
/// Fails exactly when [`read_table`](super::read_table) fails.
pub fn read_table_as_mappings(path: impl AsRef<Path>) -> Result<Vec<RowMapping>> {
    TableReader::default().read_path_as_mappings(path)
}

impl TableReader {
    pub fn read_path_as_mappings(&self, path: impl AsRef<Path>) -> Result<Vec<RowMapping>> {
        let table = self.read_path(path)?;
        let mappings = table.to_mappings();
        debug!("Built {} row mappings", mappings.len());
        Ok(mappings)
    }

    pub fn read_mappings_from<R: BufRead>(
        &self,
        reader: R,
        source_name: &str,
    ) -> Result<Vec<RowMapping>> {
        Ok(self.read_from(reader, source_name)?.to_mappings())
    }
}
