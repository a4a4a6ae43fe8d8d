//! Tests for table reading

use super::*;
use crate::error::NumCsvError;
use crate::reader::read_table;

#[test]
fn test_basic_table() {
    let table = read_str("a,b\n1,2\n3,4").unwrap();
    assert_eq!(table.headers, vec!["a", "b"]);
    assert_eq!(table.rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
}

#[test]
fn test_sample_with_blank_line() {
    let (table, stats) = read_str_with_stats(&create_sample_csv()).unwrap();

    assert_eq!(table.headers, vec!["time", "temperature", "pressure"]);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.rows[1], vec![1.0, 21.7, 1013.10]);

    assert_eq!(stats.lines_read, 5);
    assert_eq!(stats.blank_lines_skipped, 1);
    assert_eq!(stats.rows_parsed, 3);
    assert_eq!(stats.ragged_rows(), 0);
}

#[test]
fn test_row_count_excludes_blank_lines() {
    let content = "x\n\n1\n\n\n2\n3\n\n";
    let table = read_str(content).unwrap();
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.header_count(), 1);
}

#[test]
fn test_header_count_matches_comma_count() {
    let header = "a, b, , d,";
    let table = read_str(&format!("{header}\n1,2,3,4,5")).unwrap();
    assert_eq!(table.header_count(), header.matches(',').count() + 1);
    assert_eq!(table.headers, vec!["a", "b", "", "d", ""]);
}

#[test]
fn test_crlf_line_endings() {
    let table = read_str("a,b\r\n1,2\r\n\r\n3,4\r\n").unwrap();
    assert_eq!(table.headers, vec!["a", "b"]);
    assert_eq!(table.rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
}

#[test]
fn test_invalid_token_reports_row_column_and_token() {
    match read_str("a,b\n1,x") {
        Err(NumCsvError::InvalidFormat {
            row,
            line,
            column,
            token,
        }) => {
            assert_eq!(row, 1);
            assert_eq!(line, 2);
            assert_eq!(column, "b");
            assert_eq!(token, "x");
        }
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
}

#[test]
fn test_row_number_ignores_blank_lines() {
    match read_str("a\n1\n\n\nbad") {
        Err(NumCsvError::InvalidFormat { row, line, .. }) => {
            assert_eq!(row, 2);
            assert_eq!(line, 5);
        }
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
}

#[test]
fn test_extra_values_use_synthetic_column_names() {
    match read_str("a,b\n1,2,3,?") {
        Err(NumCsvError::InvalidFormat { column, token, .. }) => {
            assert_eq!(column, "Column3");
            assert_eq!(token, "?");
        }
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
}

#[test]
fn test_out_of_range_aborts_read() {
    match read_str("a,b\n1,2\n3,1e999\n5,6") {
        Err(NumCsvError::OutOfRange {
            row, column, token, ..
        }) => {
            assert_eq!(row, 2);
            assert_eq!(column, "b");
            assert_eq!(token, "1e999");
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn test_whitespace_only_line_is_not_blank() {
    // Only truly empty lines are skipped; a line of spaces is a row with one empty token
    assert!(matches!(
        read_str("a\n1\n   \n2"),
        Err(NumCsvError::InvalidFormat { row: 2, .. })
    ));
}

#[test]
fn test_trailing_delimiter_in_data_is_invalid() {
    match read_str("a,b\n1,2,") {
        Err(NumCsvError::InvalidFormat { column, token, .. }) => {
            assert_eq!(column, "Column2");
            assert_eq!(token, "");
        }
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
}

#[test]
fn test_ragged_rows_are_kept() {
    let (table, stats) = read_str_with_stats("a,b,c\n1\n1,2,3\n1,2,3,4").unwrap();
    assert_eq!(
        table.rows,
        vec![vec![1.0], vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0, 4.0]]
    );
    assert_eq!(stats.short_rows, 1);
    assert_eq!(stats.long_rows, 1);
}

#[test]
fn test_empty_source() {
    assert!(matches!(read_str(""), Err(NumCsvError::EmptySource { .. })));
}

#[test]
fn test_blank_header_line_is_single_empty_header() {
    let table = read_str("\n1\n2").unwrap();
    assert_eq!(table.headers, vec![""]);
    assert_eq!(table.rows, vec![vec![1.0], vec![2.0]]);
}

#[test]
fn test_header_only() {
    let table = read_str("a,b\n").unwrap();
    assert_eq!(table.headers, vec!["a", "b"]);
    assert!(table.is_empty());
}

#[test]
fn test_custom_delimiter() {
    // "1,5" prefix-parses to 1
    let table = read_str_with_delimiter("a;b\n1,5;2\n3;4", ';').unwrap();
    assert_eq!(table.rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
}

#[test]
fn test_invalid_configuration_rejected() {
    assert!(matches!(
        read_str_with_delimiter("a\n1", '\n'),
        Err(NumCsvError::Configuration { .. })
    ));
}

#[test]
fn test_invalid_utf8_cell_is_invalid_format() {
    let bytes: &[u8] = b"a,b\n1,2\n3,\xff\n";
    match TableReader::default().read_from(bytes, "binary.csv") {
        Err(NumCsvError::InvalidFormat {
            row,
            line,
            column,
            token,
        }) => {
            assert_eq!(row, 2);
            assert_eq!(line, 3);
            assert_eq!(column, "b");
            assert_eq!(token, "\u{FFFD}");
        }
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
}

#[test]
fn test_latin1_header_reads_normally() {
    let bytes: &[u8] = b"t,Temp\xb0C\n1,2\n";
    let table = TableReader::default().read_from(bytes, "latin1.csv").unwrap();
    assert_eq!(table.headers, vec!["t", "Temp\u{FFFD}C"]);
    assert_eq!(table.rows, vec![vec![1.0, 2.0]]);
    assert_eq!(table.column_by_index(1).unwrap(), vec![2.0]);
}

#[test]
fn test_latin1_header_from_file() {
    let mut temp_file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut temp_file, b"x,\xe9t\xe9\n0.5,1.5\n").unwrap();
    let table = read_table(temp_file.path()).unwrap();
    assert_eq!(table.header_count(), 2);
    assert_eq!(table.column_by_index(1).unwrap(), vec![1.5]);
}

#[test]
fn test_read_table_from_file() {
    let temp_file = create_temp_file(&create_sample_csv());
    let table = read_table(temp_file.path()).unwrap();
    assert_eq!(table.header_count(), 3);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.column("pressure").unwrap()[2], 1012.95);
}

#[test]
fn test_missing_file_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.csv");
    match read_table(&missing) {
        Err(NumCsvError::SourceUnavailable { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
}

#[test]
fn test_empty_file_is_empty_source() {
    let temp_file = create_temp_file("");
    assert!(matches!(
        read_table(temp_file.path()),
        Err(NumCsvError::EmptySource { .. })
    ));
}

/// Reader whose every read fails
struct FailingReader;

impl std::io::Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("device unavailable"))
    }
}

#[test]
fn test_unreadable_header_is_empty_source() {
    let reader = std::io::BufReader::new(FailingReader);
    assert!(matches!(
        TableReader::default().read_from(reader, "device.csv"),
        Err(NumCsvError::EmptySource { .. })
    ));
}

#[test]
fn test_read_failure_after_header_is_io_error() {
    let source = std::io::Read::chain(&b"a\n1\n"[..], FailingReader);
    let reader = std::io::BufReader::new(source);
    assert!(matches!(
        TableReader::default().read_from(reader, "device.csv"),
        Err(NumCsvError::Io(_))
    ));
}
