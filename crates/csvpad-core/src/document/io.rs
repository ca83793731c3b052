use super::Document;
use crate::error::Result;
use crate::storage::{
    DEFAULT_EXPORT_FILENAME, Delimiter, check_size, parse_text, read_source, write_csv_content,
};
use std::fmt;
use std::path::Path;

/// What a successful load found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadSummary {
    pub delimiter: Delimiter,
    pub data_rows: usize,
    pub columns: usize,
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loaded {} rows x {} columns ({} separated)",
            self.data_rows, self.columns, self.delimiter
        )
    }
}

impl Document {
    /// Parse `text` and make it the current grid.
    ///
    /// Size and parse errors leave the previous grid, snapshot and
    /// pagination exactly as they were.
    pub fn load_text(&mut self, text: &str, filename: Option<&str>) -> Result<LoadSummary> {
        check_size(text.len() as u64, self.options.max_bytes)?;
        let parsed = parse_text(text, self.options.parse)?;

        self.load(parsed.records);
        self.delimiter = parsed.delimiter;
        self.filename = filename.map(str::to_string);
        self.file_path = None;

        let summary = LoadSummary {
            delimiter: self.delimiter,
            data_rows: self.row_count(),
            columns: self.column_count(),
        };
        tracing::info!(
            filename = self.filename.as_deref().unwrap_or("-"),
            rows = summary.data_rows,
            columns = summary.columns,
            delimiter = summary.delimiter.name(),
            "loaded delimited text"
        );
        Ok(summary)
    }

    /// Read and load a local file.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadSummary> {
        let text = read_source(path, self.options.max_bytes)?;
        let filename = path.file_name().and_then(|name| name.to_str());
        let summary = self.load_text(&text, filename)?;
        self.file_path = Some(path.to_path_buf());
        Ok(summary)
    }

    /// Serialize the grid as comma separated text.
    pub fn export_text(&self) -> String {
        write_csv_content(&self.records)
    }

    /// Name to offer when saving: the source filename, or a default.
    pub fn export_filename(&self) -> &str {
        self.filename.as_deref().unwrap_or(DEFAULT_EXPORT_FILENAME)
    }

    /// Write the exported text to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.export_text())?;
        tracing::info!(path = %path.display(), rows = self.row_count(), "exported csv");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentOptions;
    use crate::error::CsvPadError;
    use crate::storage::ParseOptions;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_load_text_end_to_end() {
        let mut doc = Document::new();
        let text = "name,age\nAlice,30\nBob,\"2\"\"5\"\"\"";
        let summary = doc.load_text(text, Some("people.csv")).unwrap();

        assert_eq!(summary.data_rows, 2);
        assert_eq!(summary.columns, 2);
        assert_eq!(summary.to_string(), "Loaded 2 rows x 2 columns (comma separated)");
        assert_eq!(doc.get_cell(2, 1), "2\"5\"");
        assert_eq!(doc.export_text(), text);
        assert_eq!(doc.export_filename(), "people.csv");
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_load_text_tab_input_exports_commas() {
        let mut doc = Document::new();
        doc.load_text("a\tb\n1,5\t2\n", None).unwrap();
        assert_eq!(doc.delimiter(), Delimiter::Tab);
        assert_eq!(doc.export_text(), "a,b\n\"1,5\",2");
        assert_eq!(doc.export_filename(), "edited_data.csv");
    }

    #[test]
    fn test_failed_load_keeps_previous_grid() {
        let mut doc = Document::new();
        doc.load_text("a,b\n1,2", Some("first.csv")).unwrap();
        doc.edit_cell(1, 0, "x");

        assert!(matches!(doc.load_text("  \n", None), Err(CsvPadError::EmptyInput)));
        assert_eq!(doc.get_cell(1, 0), "x");
        assert!(doc.is_modified());
        assert_eq!(doc.export_filename(), "first.csv");
        assert_eq!(doc.snapshot()[1][0], "1");
    }

    #[test]
    fn test_size_limit_checked_before_parse() {
        let options = DocumentOptions {
            max_bytes: 4,
            ..DocumentOptions::default()
        };
        let mut doc = Document::with_options(options).unwrap();
        let err = doc.load_text("a,b,c", None).unwrap_err();
        assert!(matches!(err, CsvPadError::SizeLimitExceeded { size: 5, limit: 4 }));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_strict_option_rejects_ragged() {
        let options = DocumentOptions {
            parse: ParseOptions { strict: true },
            ..DocumentOptions::default()
        };
        let mut doc = Document::with_options(options).unwrap();
        assert!(matches!(
            doc.load_text("a,b\n1", None),
            Err(CsvPadError::RaggedRecord { .. })
        ));
    }

    #[test]
    fn test_load_resets_to_first_page() {
        let mut doc = Document::new();
        let text: String = std::iter::once("n".to_string())
            .chain((1..=60).map(|i| i.to_string()))
            .collect::<Vec<_>>()
            .join("\n");
        doc.load_text(&text, None).unwrap();
        doc.go_to_page(3);
        doc.load_text(&text, None).unwrap();
        assert_eq!(doc.pager().current_page(), 1);
        assert_eq!(doc.row_count(), 60);
    }

    #[test]
    fn test_load_file_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let mut file = std::fs::File::create(&input).unwrap();
        write!(file, "a;b\n1;\"x;y\"\n").unwrap();
        drop(file);

        let mut doc = Document::new();
        let summary = doc.load_file(&input).unwrap();
        assert_eq!(summary.delimiter, Delimiter::Semicolon);
        assert_eq!(doc.filename(), Some("input.csv"));
        assert_eq!(doc.file_path(), Some(&input));

        doc.edit_cell(1, 0, "2");
        let output = dir.path().join("output.csv");
        doc.save_to(&output).unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "a,b\n2,x;y");
    }

    #[test]
    fn test_load_file_missing_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = Document::new();
        let err = doc.load_file(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CsvPadError::SourceUnavailable { .. }));
        assert!(doc.file_path().is_none());
    }
}
