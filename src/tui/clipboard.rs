//! Clipboard abstraction layer.
//!
//! The app talks to a [`ClipboardProvider`] so tests can run without a
//! system clipboard.

/// Trait for clipboard operations.
pub trait ClipboardProvider {
    /// Get text from clipboard.
    fn get_text(&mut self) -> Option<String>;

    /// Set text to clipboard. Returns `false` when the clipboard is unavailable.
    fn set_text(&mut self, text: String) -> bool;
}

/// System clipboard implementation using arboard.
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        let mut cb = arboard::Clipboard::new().ok()?;
        cb.get_text().ok()
    }

    fn set_text(&mut self, text: String) -> bool {
        match arboard::Clipboard::new() {
            Ok(mut cb) => cb.set_text(text).is_ok(),
            Err(err) => {
                tracing::warn!(%err, "system clipboard unavailable");
                false
            }
        }
    }
}

/// The system clipboard when one is reachable, else a process-local one.
pub fn default_clipboard() -> Box<dyn ClipboardProvider> {
    match arboard::Clipboard::new() {
        Ok(_) => Box::new(SystemClipboard),
        Err(err) => {
            tracing::warn!(%err, "system clipboard unavailable, yank and paste stay in-process");
            Box::new(MemoryClipboard::default())
        }
    }
}

/// Process-local clipboard.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    pub text: Option<String>,
}

impl ClipboardProvider for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: String) -> bool {
        self.text = Some(text);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_round_trip() {
        let mut clipboard = MemoryClipboard::default();
        assert!(clipboard.get_text().is_none());
        assert!(clipboard.set_text("a\tb".to_string()));
        assert_eq!(clipboard.get_text().as_deref(), Some("a\tb"));
    }
}
