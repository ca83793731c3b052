use super::pager::{DEFAULT_ROWS_PER_PAGE, Pager};
use super::paste::PastePolicy;
use crate::error::Result;
use crate::storage::{DEFAULT_MAX_BYTES, Delimiter, ParseOptions, Record};
use std::path::PathBuf;

/// Tunables for a document session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentOptions {
    pub rows_per_page: usize,
    /// Inputs larger than this are refused before parsing.
    pub max_bytes: u64,
    pub parse: ParseOptions,
    pub paste_policy: PastePolicy,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            max_bytes: DEFAULT_MAX_BYTES,
            parse: ParseOptions::default(),
            paste_policy: PastePolicy::default(),
        }
    }
}

/// UI-agnostic editing session over one delimited text source.
///
/// Owns the grid and the snapshot taken when it was loaded. Row 0 of the
/// grid is the header; rows from 1 on are data rows. Display layers read
/// everything through [`Document::page_window`] and mutate through the
/// editing methods, so no state lives in the UI.
pub struct Document {
    /// Current grid, header first
    pub(crate) records: Vec<Record>,
    /// Copy of the grid as loaded; never mutated
    pub(crate) snapshot: Vec<Record>,
    /// Whether any cell has been written since the last load
    pub(crate) modified: bool,
    /// Name offered when exporting
    pub(crate) filename: Option<String>,
    /// Path the grid was read from, if it came from a local file
    pub(crate) file_path: Option<PathBuf>,
    /// Separator detected on the last load
    pub(crate) delimiter: Delimiter,
    pub(crate) pager: Pager,
    pub(crate) options: DocumentOptions,
}

impl Document {
    /// Create an empty document with default options.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            snapshot: Vec::new(),
            modified: false,
            filename: None,
            file_path: None,
            delimiter: Delimiter::default(),
            pager: Pager::default(),
            options: DocumentOptions::default(),
        }
    }

    /// Create an empty document, validating `options`.
    pub fn with_options(options: DocumentOptions) -> Result<Self> {
        let pager = Pager::new(options.rows_per_page)?;
        Ok(Self {
            pager,
            options,
            ..Self::new()
        })
    }

    /// Replace the grid with `records`, snapshot it and start a clean session.
    pub fn load(&mut self, records: Vec<Record>) {
        self.snapshot = records.clone();
        self.records = records;
        self.modified = false;
        self.pager.reset(self.records.len().saturating_sub(1));
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn snapshot(&self) -> &[Record] {
        &self.snapshot
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of header fields (0 when nothing is loaded).
    pub fn column_count(&self) -> usize {
        self.records.first().map_or(0, Vec::len)
    }

    /// Number of data rows, header excluded.
    pub fn row_count(&self) -> usize {
        self.pager.total_data_rows()
    }

    pub fn header(&self) -> &[String] {
        self.records.first().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
