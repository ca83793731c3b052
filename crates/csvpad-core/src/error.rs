//! Error types for csvpad core.

use thiserror::Error;

/// Errors that can occur while loading, editing or exporting a document.
///
/// Every variant is recoverable: a failed operation leaves the previously
/// loaded grid untouched.
#[derive(Error, Debug)]
pub enum CsvPadError {
    #[error("No data found in the CSV file")]
    EmptyInput,

    #[error("File too large ({size} bytes, max {limit})")]
    SizeLimitExceeded { size: u64, limit: u64 },

    #[error("Could not read {source_label}: {message}")]
    SourceUnavailable {
        source_label: String,
        message: String,
    },

    #[error("Unsupported file type: {0} (expected .csv, .tsv or .txt)")]
    UnsupportedFileType(String),

    #[error("Line {line} has {found} fields, header has {expected}")]
    RaggedRecord {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Rows per page must be greater than zero (got {0})")]
    InvalidRowsPerPage(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CsvPadError>;
