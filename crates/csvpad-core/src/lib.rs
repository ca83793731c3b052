//! csvpad-core - UI-agnostic delimited-text engine, grid model and pagination.

pub mod document;
pub mod error;
pub mod preferences;
pub mod storage;

pub use document::{
    Document, DocumentOptions, LoadSummary, PageButton, PageWindow, Pager, PastePolicy, WindowRow,
};
pub use error::{CsvPadError, Result};
pub use storage::{Delimiter, ParseOptions, Record};
