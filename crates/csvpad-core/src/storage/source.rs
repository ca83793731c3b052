//! Acquiring source text and naming it.

use crate::error::{CsvPadError, Result};
use std::path::Path;
use url::Url;

/// Default input ceiling (10 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Filename offered for export when the source had none.
pub const DEFAULT_EXPORT_FILENAME: &str = "edited_data.csv";

/// Filename used for URLs with no usable last path segment.
pub const DEFAULT_REMOTE_FILENAME: &str = "remote.csv";

const SUPPORTED_EXTENSIONS: [&str; 3] = ["csv", "tsv", "txt"];

/// Whether a path looks like delimited text we are willing to open.
pub fn is_supported_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Derive a filename label from the last path segment of a URL.
pub fn filename_from_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|segments| segments.last().map(str::to_string))
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_REMOTE_FILENAME.to_string())
}

/// Fail fast when `size` exceeds `limit`.
pub fn check_size(size: u64, limit: u64) -> Result<()> {
    if size > limit {
        return Err(CsvPadError::SizeLimitExceeded { size, limit });
    }
    Ok(())
}

/// Read a local file as text, enforcing the size ceiling before reading.
pub fn read_source(path: &Path, limit: u64) -> Result<String> {
    let label = path.display().to_string();
    if !is_supported_path(path) {
        return Err(CsvPadError::UnsupportedFileType(label));
    }

    let unavailable = |err: std::io::Error| CsvPadError::SourceUnavailable {
        source_label: label.clone(),
        message: err.to_string(),
    };

    let meta = std::fs::metadata(path).map_err(unavailable)?;
    check_size(meta.len(), limit)?;
    std::fs::read_to_string(path).map_err(unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_path(Path::new("data.csv")));
        assert!(is_supported_path(Path::new("DATA.CSV")));
        assert!(is_supported_path(Path::new("dir/data.tsv")));
        assert!(is_supported_path(Path::new("notes.txt")));
        assert!(!is_supported_path(Path::new("image.png")));
        assert!(!is_supported_path(Path::new("noext")));
    }

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename_from_url("https://example.com/files/report.csv?x=1"),
            "report.csv"
        );
        assert_eq!(filename_from_url("https://example.com/"), "remote.csv");
        assert_eq!(filename_from_url("not a url"), "remote.csv");
    }

    #[test]
    fn test_check_size() {
        assert!(check_size(10, 10).is_ok());
        assert!(matches!(
            check_size(11, 10),
            Err(CsvPadError::SizeLimitExceeded { size: 11, limit: 10 })
        ));
    }

    #[test]
    fn test_read_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(&dir.path().join("missing.csv"), DEFAULT_MAX_BYTES).unwrap_err();
        assert!(matches!(err, CsvPadError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_read_source_enforces_limit() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "a,b\n1,2").unwrap();
        let err = read_source(file.path(), 3).unwrap_err();
        assert!(matches!(err, CsvPadError::SizeLimitExceeded { size: 7, limit: 3 }));
        assert_eq!(read_source(file.path(), 7).unwrap(), "a,b\n1,2");
    }

    #[test]
    fn test_read_source_rejects_extension() {
        let file = tempfile::Builder::new().suffix(".bin").tempfile().unwrap();
        assert!(matches!(
            read_source(file.path(), DEFAULT_MAX_BYTES),
            Err(CsvPadError::UnsupportedFileType(_))
        ));
    }
}
