//! Token to number conversion
//!
//! Tokens are read with prefix semantics: the longest leading run of the form
//! `[sign] digits [. digits] [e|E [sign] digits]` is converted and whatever
//! follows it is ignored. A token with no such prefix is an invalid format.
//! Values that overflow `f64`, or non-zero literals that underflow to zero or
//! to a subnormal, are out of range.

use crate::error::{NumCsvError, Result};

/// Convert a trimmed token to `f64`.
///
/// `row_index` is the zero-based position of the row among data rows, `line`
/// the 1-based line in the source. Both, with `column`, end up in the error.
pub fn parse_value(token: &str, row_index: usize, line: usize, column: &str) -> Result<f64> {
    let prefix = numeric_prefix(token)
        .ok_or_else(|| NumCsvError::invalid_format(row_index, line, column, token))?;

    let value = prefix
        .text
        .parse::<f64>()
        .map_err(|_| NumCsvError::invalid_format(row_index, line, column, token))?;

    if value.is_infinite() || (prefix.has_nonzero_digit && (value == 0.0 || value.is_subnormal()))
    {
        return Err(NumCsvError::out_of_range(row_index, line, column, token));
    }

    Ok(value)
}

/// Leading numeric part of a token
#[derive(Debug, PartialEq, Eq)]
struct NumericPrefix<'a> {
    text: &'a str,
    has_nonzero_digit: bool,
}

fn numeric_prefix(token: &str) -> Option<NumericPrefix<'_>> {
    let bytes = token.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let integer_digits = count_digits(&bytes[pos..]);
    let mut has_nonzero_digit = bytes[pos..pos + integer_digits]
        .iter()
        .any(|&b| b != b'0');
    pos += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[pos + 1..]);
        has_nonzero_digit |= bytes[pos + 1..pos + 1 + fraction_digits]
            .iter()
            .any(|&b| b != b'0');
        pos += 1 + fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        return None;
    }

    // An exponent only counts when it has at least one digit
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exponent_digits = count_digits(&bytes[exp_pos..]);
        if exponent_digits > 0 {
            pos = exp_pos + exponent_digits;
        }
    }

    Some(NumericPrefix {
        text: &token[..pos],
        has_nonzero_digit,
    })
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
