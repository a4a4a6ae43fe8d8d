//! Constants shared by the tokenizer, reader and CLI.

// =============================================================================
// Tokenizing
// =============================================================================

/// Delimiter used when none is configured
pub const DEFAULT_DELIMITER: char = ',';

/// Characters stripped from both ends of every token
pub const TRIM_CHARS: &[char] = &[' ', '\t', '\r', '\n'];

/// Delimiters that would collide with line splitting
pub const FORBIDDEN_DELIMITERS: &[char] = &['\n', '\r'];

// =============================================================================
// Column naming
// =============================================================================

/// Prefix for names given to values beyond the header count, e.g. `Column3`
pub const SYNTHETIC_COLUMN_PREFIX: &str = "Column";

// =============================================================================
// Logging
// =============================================================================

/// Default log level for the CLI
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log level when `--verbose` is set
pub const VERBOSE_LOG_LEVEL: &str = "debug";
