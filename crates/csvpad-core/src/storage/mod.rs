//! Delimited text storage: detection, parsing, writing and source access.

pub mod delimiter;
pub mod parser;
pub mod source;
pub mod writer;

/// One row of fields, already unquoted and trimmed.
pub type Record = Vec<String>;

pub use delimiter::{Delimiter, detect_delimiter};
pub use parser::{ParseOptions, ParsedText, parse_line, parse_records, parse_text};
pub use source::{
    DEFAULT_EXPORT_FILENAME, DEFAULT_MAX_BYTES, check_size, filename_from_url, is_supported_path,
    read_source,
};
pub use writer::{escape_csv_field, write_csv_content, write_record};
