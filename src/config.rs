//! Reader configuration and validation.

use crate::constants::{DEFAULT_DELIMITER, FORBIDDEN_DELIMITERS};
use crate::error::{NumCsvError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings applied to every line of a read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Single character separating fields on a line
    pub delimiter: char,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Check the configuration before a read starts
    pub fn validate(&self) -> Result<()> {
        if FORBIDDEN_DELIMITERS.contains(&self.delimiter) {
            return Err(NumCsvError::configuration(format!(
                "delimiter {:?} cannot be a line terminator",
                self.delimiter
            )));
        }

        debug!("Reader configuration valid: delimiter={:?}", self.delimiter);
        Ok(())
    }
}
