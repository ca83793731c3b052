//! Parser for delimited text (CSV, TSV and friends).

use super::Record;
use super::delimiter::{Delimiter, detect_delimiter};
use crate::error::{CsvPadError, Result};

/// Options controlling how tolerant the parser is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject records whose field count differs from the header's.
    pub strict: bool,
}

/// Result of parsing a whole text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedText {
    pub delimiter: Delimiter,
    pub records: Vec<Record>,
}

/// Parse delimited text, detecting the separator from its first line.
///
/// The text is trimmed before it is split, so trailing newlines do not
/// produce empty records. Each physical line becomes one record; quoted
/// fields cannot span lines. Line numbers in errors count physical lines of
/// the untrimmed input.
pub fn parse_text(content: &str, options: ParseOptions) -> Result<ParsedText> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CsvPadError::EmptyInput);
    }

    let leading = &content[..content.len() - content.trim_start().len()];
    let first_line_number = leading.matches('\n').count() + 1;

    let first_line = trimmed.split('\n').next().unwrap_or_default();
    let delimiter = detect_delimiter(first_line);
    let records = split_records(trimmed, delimiter, options, first_line_number)?;

    tracing::debug!(
        delimiter = delimiter.name(),
        records = records.len(),
        "parsed delimited text"
    );

    Ok(ParsedText { delimiter, records })
}

/// Parse text with a known delimiter. Blank text is [`CsvPadError::EmptyInput`].
pub fn parse_records(
    content: &str,
    delimiter: Delimiter,
    options: ParseOptions,
) -> Result<Vec<Record>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CsvPadError::EmptyInput);
    }
    let leading = &content[..content.len() - content.trim_start().len()];
    split_records(trimmed, delimiter, options, leading.matches('\n').count() + 1)
}

/// `first_line_number` is the physical line the first record came from.
fn split_records(
    content: &str,
    delimiter: Delimiter,
    options: ParseOptions,
    first_line_number: usize,
) -> Result<Vec<Record>> {
    let records: Vec<Record> = content
        .split('\n')
        .map(|line| parse_line(line, delimiter))
        .collect();

    if options.strict {
        let expected = records[0].len();
        if let Some((idx, record)) = records
            .iter()
            .enumerate()
            .find(|(_, record)| record.len() != expected)
        {
            return Err(CsvPadError::RaggedRecord {
                line: first_line_number + idx,
                expected,
                found: record.len(),
            });
        }
    }

    Ok(records)
}

/// Parse a single physical line into trimmed fields.
///
/// An unterminated quote simply runs to the end of the line.
pub fn parse_line(line: &str, delimiter: Delimiter) -> Record {
    let delimiter = delimiter.as_char();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                current.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(c);
        }
    }
    fields.push(current.trim().to_string());
    fields
}
