//! Application state and logic.
//!
//! [`App`] wraps a [`Document`] with cursor, mode and buffer state. All grid
//! data lives in the document; the app only remembers where the cursor is
//! and what the user is typing.

use csvpad_core::preferences::{PreferenceStore, Theme, load_theme, toggle_theme};
use csvpad_core::Document;
use std::path::PathBuf;

use super::clipboard::ClipboardProvider;

const DEFAULT_COL_WIDTH: usize = 14;

/// Modal editing state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Navigate the grid, execute single-key commands.
    Normal,
    /// Edit the contents of the current cell.
    Edit,
    /// Enter ex-style commands (`:w`, `:q`, etc.).
    Command,
}

pub struct App {
    pub doc: Document,
    /// Data row under the cursor (1-based; row 0 is the header)
    pub cursor_row: usize,
    pub cursor_col: usize,
    /// First column drawn
    pub viewport_col: usize,
    /// Number of columns that fit on screen, set by the renderer
    pub visible_cols: usize,
    pub col_width: usize,
    pub mode: Mode,
    /// Edit buffer for cell editing
    pub edit_buffer: String,
    /// Cursor position within edit buffer (byte offset)
    pub edit_cursor: usize,
    pub command_buffer: String,
    pub command_cursor: usize,
    pub status_message: String,
    /// Whether edits happened since the last load or save
    pub unsaved: bool,
    /// Whether the buffer was written out since it was loaded; the file on
    /// disk then no longer matches the snapshot `revert` restores.
    saved_since_load: bool,
    pub theme: Theme,
    preferences: Box<dyn PreferenceStore>,
    clipboard: Box<dyn ClipboardProvider>,
}

impl App {
    pub fn new(
        doc: Document,
        preferences: Box<dyn PreferenceStore>,
        clipboard: Box<dyn ClipboardProvider>,
    ) -> Self {
        let theme = load_theme(preferences.as_ref());
        let mut app = Self {
            doc,
            cursor_row: 1,
            cursor_col: 0,
            viewport_col: 0,
            visible_cols: 1,
            col_width: DEFAULT_COL_WIDTH,
            mode: Mode::Normal,
            edit_buffer: String::new(),
            edit_cursor: 0,
            command_buffer: String::new(),
            command_cursor: 0,
            status_message: String::new(),
            unsaved: false,
            saved_since_load: false,
            theme,
            preferences,
            clipboard,
        };
        app.sync_cursor();
        app
    }

    fn require_data(&mut self) -> bool {
        if self.doc.is_empty() {
            self.status_message = "No data loaded. Use :e <path>".to_string();
            return false;
        }
        true
    }

    /// Pull the cursor back onto the visible page and the header's columns.
    pub fn sync_cursor(&mut self) {
        let pager = self.doc.pager();
        if pager.total_data_rows() == 0 {
            self.cursor_row = 1;
        } else {
            self.cursor_row = self.cursor_row.clamp(pager.start_row(), pager.end_row());
        }
        let last_col = self.doc.column_count().saturating_sub(1);
        self.cursor_col = self.cursor_col.min(last_col);
        self.update_viewport();
    }

    /// Keep the cursor column on screen.
    pub fn update_viewport(&mut self) {
        let visible = self.visible_cols.max(1);
        if self.cursor_col < self.viewport_col {
            self.viewport_col = self.cursor_col;
        } else if self.cursor_col >= self.viewport_col + visible {
            self.viewport_col = self.cursor_col + 1 - visible;
        }
    }

    /// Put the cursor on `(row, col)`, flipping to the page that holds `row`.
    fn place_cursor(&mut self, row: usize, col: usize) {
        let page = self.doc.pager().page_of_row(row);
        self.doc.go_to_page(page);
        self.cursor_row = row;
        self.cursor_col = col;
        self.sync_cursor();
    }

    /// Move cursor by delta. Vertical moves cross page boundaries.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let last_col = self.doc.column_count().saturating_sub(1) as i64;
        let last_row = self.doc.row_count().max(1) as i64;
        let col = (self.cursor_col as i64 + dx as i64).clamp(0, last_col) as usize;
        let row = (self.cursor_row as i64 + dy as i64).clamp(1, last_row) as usize;
        self.place_cursor(row, col);
    }

    /// Tab-style movement; stays put at either end of the grid.
    pub fn next_cell(&mut self, delta: isize) {
        if let Some((row, col)) = self.doc.next_cell(self.cursor_row, self.cursor_col, delta) {
            self.place_cursor(row, col);
        }
    }

    pub fn home_col(&mut self) {
        self.cursor_col = 0;
        self.update_viewport();
    }

    pub fn end_col(&mut self) {
        self.cursor_col = self.doc.column_count().saturating_sub(1);
        self.update_viewport();
    }

    /// Flip pages, keeping the cursor at the same offset within the page.
    pub fn change_page(&mut self, turn: fn(&mut Document) -> bool) {
        let offset = self.cursor_row.saturating_sub(self.doc.pager().start_row());
        if turn(&mut self.doc) {
            self.cursor_row = self.doc.pager().start_row() + offset;
            self.sync_cursor();
        }
    }

    pub fn current_value(&self) -> &str {
        self.doc.get_cell(self.cursor_row, self.cursor_col)
    }

    pub fn enter_edit_mode(&mut self) {
        if !self.require_data() {
            return;
        }
        self.edit_buffer = self.current_value().to_string();
        self.edit_cursor = self.edit_buffer.len();
        self.mode = Mode::Edit;
    }

    pub fn commit_edit(&mut self) {
        self.mode = Mode::Normal;
        let value = std::mem::take(&mut self.edit_buffer);
        self.edit_cursor = 0;
        if value != self.current_value() {
            self.doc.edit_cell(self.cursor_row, self.cursor_col, &value);
            self.unsaved = true;
        }
    }

    pub fn clear_current_cell(&mut self) {
        if !self.require_data() || self.current_value().is_empty() {
            return;
        }
        self.doc.edit_cell(self.cursor_row, self.cursor_col, "");
        self.unsaved = true;
    }

    pub fn yank(&mut self) {
        let value = self.current_value().to_string();
        self.status_message = if self.clipboard.set_text(value) {
            "Yanked cell".to_string()
        } else {
            "Error: clipboard unavailable".to_string()
        };
    }

    pub fn paste_from_clipboard(&mut self) {
        match self.clipboard.get_text() {
            Some(text) if !text.trim().is_empty() => self.paste_text(&text),
            _ => self.status_message = "Clipboard is empty".to_string(),
        }
    }

    /// Paste at the cursor. Text with a tab or line break is a block and
    /// spreads over cells; anything else lands verbatim in the current cell.
    pub fn paste_text(&mut self, text: &str) {
        if !self.require_data() {
            return;
        }
        let value = text.trim();
        let written = if value.contains(['\t', '\n']) {
            self.doc.paste_block(text, self.cursor_row, self.cursor_col)
        } else {
            self.doc.edit_cell(self.cursor_row, self.cursor_col, value);
            1
        };
        self.unsaved = true;
        self.status_message = format!("Pasted {} cells", written);
        self.sync_cursor();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = toggle_theme(self.preferences.as_mut());
        self.status_message = format!("Theme: {}", self.theme.as_str());
    }

    /// Default save target: the source path, else the export filename.
    fn default_save_path(&self) -> PathBuf {
        self.doc
            .file_path()
            .cloned()
            .unwrap_or_else(|| PathBuf::from(self.doc.export_filename()))
    }

    /// Write comma separated output. Returns `true` on success.
    pub fn save(&mut self, path: Option<PathBuf>) -> bool {
        if !self.require_data() {
            return false;
        }
        let path = path.unwrap_or_else(|| self.default_save_path());
        match self.doc.save_to(&path) {
            Ok(()) => {
                self.unsaved = false;
                self.saved_since_load = true;
                self.status_message = format!("Saved to {}", path.display());
                true
            }
            Err(e) => {
                self.status_message = format!("Error saving: {}", e);
                false
            }
        }
    }

    pub fn open(&mut self, path: PathBuf) {
        match self.doc.load_file(&path) {
            Ok(summary) => {
                self.unsaved = false;
                self.saved_since_load = false;
                self.cursor_row = 1;
                self.cursor_col = 0;
                self.viewport_col = 0;
                self.sync_cursor();
                self.status_message = summary.to_string();
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    pub fn revert(&mut self) {
        let changed = self.doc.changed_cells().len();
        self.doc.revert_to_snapshot();
        self.unsaved = self.saved_since_load;
        self.sync_cursor();
        self.status_message = format!("Reverted {} changed cells", changed);
    }

    /// Run the command in the command buffer. Returns `true` to quit.
    pub fn execute_command(&mut self) -> bool {
        let cmd = self.command_buffer.trim().to_string();
        self.command_buffer.clear();
        self.command_cursor = 0;
        self.mode = Mode::Normal;

        let (command, args) = match cmd.split_once(' ') {
            Some((command, args)) => (command, Some(args.trim()).filter(|s| !s.is_empty())),
            None => (cmd.as_str(), None),
        };

        match command {
            "q" | "quit" => {
                if self.unsaved {
                    self.status_message =
                        "Unsaved changes! Use :q! to force quit or :wq to save and quit"
                            .to_string();
                    return false;
                }
                return true;
            }
            "q!" => return true,
            "w" | "save" => {
                self.save(args.map(PathBuf::from));
            }
            "wq" | "x" => {
                if self.save(args.map(PathBuf::from)) {
                    return true;
                }
            }
            "e" | "open" => match args {
                Some(path) => self.open(PathBuf::from(path)),
                None => self.status_message = "Usage: :e <path>".to_string(),
            },
            "rows" | "rpp" => match args.and_then(|n| n.parse::<usize>().ok()) {
                Some(n) => match self.doc.set_rows_per_page(n) {
                    Ok(()) => {
                        self.sync_cursor();
                        self.status_message = format!("{} rows per page", n);
                    }
                    Err(e) => self.status_message = format!("Error: {}", e),
                },
                None => self.status_message = "Usage: :rows N".to_string(),
            },
            "page" => match args.and_then(|n| n.parse::<usize>().ok()) {
                Some(n) if n == self.doc.pager().current_page() => {}
                Some(n) => {
                    if self.doc.go_to_page(n) {
                        self.sync_cursor();
                    } else {
                        self.status_message = format!("No page {}", n);
                    }
                }
                None => self.status_message = "Usage: :page N".to_string(),
            },
            "revert" => self.revert(),
            "changes" => {
                self.status_message = format!("{} cells changed", self.doc.changed_cells().len());
            }
            "theme" => self.toggle_theme(),
            "help" | "h" => {
                self.status_message =
                    ":w [path]  :wq  :q  :q!  :e <path>  :rows N  :page N  :revert  :changes  :theme"
                        .to_string();
            }
            "" => {}
            _ => {
                self.status_message = format!("Unknown command: {}", command);
            }
        }
        false
    }
}
