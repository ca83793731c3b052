//! Writer for comma separated output.
//!
//! Output is always comma separated, whatever delimiter the input used.

use super::Record;

const OUTPUT_DELIMITER: char = ',';

/// Render records as CSV text: fields joined by commas, records by `\n`,
/// no trailing terminator.
pub fn write_csv_content(records: &[Record]) -> String {
    records
        .iter()
        .map(|record| write_record(record))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a single record as one CSV line.
pub fn write_record(record: &[String]) -> String {
    record
        .iter()
        .map(|field| escape_csv_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote a field when it contains the delimiter, a quote or a line break.
pub fn escape_csv_field(field: &str) -> String {
    let needs_quotes = field
        .chars()
        .any(|c| matches!(c, OUTPUT_DELIMITER | '"' | '\n' | '\r'));

    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ParseOptions, parse_text};
    use pretty_assertions::assert_eq;

    fn record(fields: &[&str]) -> Record {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("simple"), "simple");
        assert_eq!(escape_csv_field("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv_field("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv_field("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_csv_field("cr\rhere"), "\"cr\rhere\"");
        assert_eq!(escape_csv_field(""), "");
    }

    #[test]
    fn test_escape_leaves_other_delimiters_alone() {
        assert_eq!(escape_csv_field("a;b|c\td"), "a;b|c\td");
    }

    #[test]
    fn test_write_no_trailing_terminator() {
        let records = vec![record(&["a", "b"]), record(&["1", "2"])];
        assert_eq!(write_csv_content(&records), "a,b\n1,2");
    }

    #[test]
    fn test_write_end_to_end_example() {
        let records = vec![
            record(&["name", "age"]),
            record(&["Alice", "30"]),
            record(&["Bob", "2\"5\""]),
        ];
        assert_eq!(
            write_csv_content(&records),
            "name,age\nAlice,30\nBob,\"2\"\"5\"\"\""
        );
    }

    #[test]
    fn test_write_ragged_records_verbatim() {
        let records = vec![record(&["a", "b", "c"]), record(&["1"]), record(&[])];
        assert_eq!(write_csv_content(&records), "a,b,c\n1\n");
    }

    #[test]
    fn test_semicolon_input_normalizes_to_comma() {
        let parsed = parse_text("a;b\n1,5;2", ParseOptions::default()).unwrap();
        assert_eq!(write_csv_content(&parsed.records), "a,b\n\"1,5\",2");
    }

    #[test]
    fn test_round_trip_with_commas_and_quotes() {
        let records = vec![
            record(&["title", "quote"]),
            record(&["x, y", "she said \"hi\""]),
            record(&["\"\"", ","]),
        ];
        let text = write_csv_content(&records);
        let parsed = parse_text(&text, ParseOptions::default()).unwrap();
        assert_eq!(parsed.records, records);
        assert_eq!(write_csv_content(&parsed.records), text);
    }

    #[test]
    fn test_embedded_newline_does_not_round_trip() {
        // Known boundary: the parser reads one physical line per record.
        let records = vec![record(&["h"]), record(&["two\nlines"])];
        let text = write_csv_content(&records);
        let parsed = parse_text(&text, ParseOptions::default()).unwrap();
        assert_ne!(parsed.records, records);
        assert_eq!(parsed.records.len(), 3);
    }
}
