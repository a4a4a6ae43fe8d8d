//! Line tokenizing
//!
//! A line is split on every occurrence of the delimiter and each piece is
//! trimmed of spaces, tabs, carriage returns and newlines. There is no quoting,
//! so a delimiter inside a value always starts a new token.

use crate::constants::TRIM_CHARS;

/// Split `line` into trimmed, borrowed tokens.
///
/// Always yields at least one token: an empty line gives a single `""`.
pub fn split_tokens(line: &str, delimiter: char) -> impl Iterator<Item = &str> {
    line.split(delimiter).map(trim_token)
}

/// Split `line` into owned, trimmed tokens
pub fn tokenize(line: &str, delimiter: char) -> Vec<String> {
    split_tokens(line, delimiter).map(str::to_string).collect()
}

fn trim_token(token: &str) -> &str {
    token.trim_matches(TRIM_CHARS)
}
