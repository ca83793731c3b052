//! Field separator detection.

use std::fmt;

/// A field separator recognised by the detector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Semicolon,
    Pipe,
}

impl Delimiter {
    /// Candidates in tie-break order: an earlier entry wins equal counts.
    pub const CANDIDATES: [Delimiter; 4] = [
        Delimiter::Comma,
        Delimiter::Tab,
        Delimiter::Semicolon,
        Delimiter::Pipe,
    ];

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
            Delimiter::Pipe => '|',
        }
    }

    /// Human readable name for status lines.
    pub fn name(self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
            Delimiter::Semicolon => "semicolon",
            Delimiter::Pipe => "pipe",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the separator that occurs most often in `line`.
///
/// Only a strictly higher count replaces the current pick, so ties resolve to
/// the earliest candidate and a line with no candidates yields a comma. Quoted
/// content is counted too; a quoted field full of commas can outvote the real
/// separator.
pub fn detect_delimiter(line: &str) -> Delimiter {
    let mut best = Delimiter::Comma;
    let mut best_count = 0usize;

    for candidate in Delimiter::CANDIDATES {
        let count = line.matches(candidate.as_char()).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_semicolon_beats_single_comma() {
        assert_eq!(detect_delimiter("a;b;c,d"), Delimiter::Semicolon);
    }

    #[test]
    fn test_detect_defaults_to_comma() {
        assert_eq!(detect_delimiter("single"), Delimiter::Comma);
        assert_eq!(detect_delimiter(""), Delimiter::Comma);
    }

    #[test]
    fn test_detect_tie_prefers_earlier_candidate() {
        assert_eq!(detect_delimiter("a,b\tc"), Delimiter::Comma);
        assert_eq!(detect_delimiter("a\tb;c"), Delimiter::Tab);
        assert_eq!(detect_delimiter("a;b|c"), Delimiter::Semicolon);
    }

    #[test]
    fn test_detect_tab_and_pipe() {
        assert_eq!(detect_delimiter("a\tb\tc"), Delimiter::Tab);
        assert_eq!(detect_delimiter("a|b|c,d"), Delimiter::Pipe);
    }

    #[test]
    fn test_detect_counts_quoted_content() {
        // Accepted limitation: the quoted commas outvote the semicolon.
        assert_eq!(detect_delimiter(r#""x,y,z";b"#), Delimiter::Comma);
    }
}
