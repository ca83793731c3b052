use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use csvpad_core::Document;

use super::app::{App, Mode};
use super::keymap::Action;

fn prev_boundary(buffer: &str, cursor: usize) -> usize {
    buffer[..cursor]
        .char_indices()
        .next_back()
        .map_or(0, |(idx, _)| idx)
}

fn next_boundary(buffer: &str, cursor: usize) -> usize {
    buffer[cursor..]
        .chars()
        .next()
        .map_or(cursor, |c| cursor + c.len_utf8())
}

/// Line editing on `buffer`; `cursor` is a byte offset on a char boundary.
fn handle_text_input(buffer: &mut String, cursor: &mut usize, key: KeyEvent) {
    match key.code {
        KeyCode::Left => *cursor = prev_boundary(buffer, *cursor),
        KeyCode::Right => *cursor = next_boundary(buffer, *cursor),
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = buffer.len(),
        KeyCode::Backspace => {
            let start = prev_boundary(buffer, *cursor);
            buffer.drain(start..*cursor);
            *cursor = start;
        }
        KeyCode::Delete => {
            let end = next_boundary(buffer, *cursor);
            buffer.drain(*cursor..end);
        }
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            buffer.insert(*cursor, c);
            *cursor += c.len_utf8();
        }
        _ => {}
    }
}

fn insert_text(buffer: &mut String, cursor: &mut usize, text: &str) {
    buffer.insert_str(*cursor, text);
    *cursor += text.len();
}

/// Result of applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyResult {
    Continue,
    Quit,
}

/// Apply an action to the application state.
pub fn apply_action(app: &mut App, action: Action) -> ApplyResult {
    match action {
        Action::Cancel => match app.mode {
            Mode::Edit => {
                app.mode = Mode::Normal;
                app.edit_buffer.clear();
                app.edit_cursor = 0;
            }
            Mode::Command => {
                app.mode = Mode::Normal;
                app.command_buffer.clear();
                app.command_cursor = 0;
            }
            Mode::Normal => {}
        },

        Action::EnterEdit => app.enter_edit_mode(),
        Action::CommitEdit => app.commit_edit(),
        Action::CommitAndMove(delta) => {
            app.commit_edit();
            app.next_cell(delta);
            app.enter_edit_mode();
        }
        Action::EnterCommand => {
            app.mode = Mode::Command;
            app.command_buffer.clear();
            app.command_cursor = 0;
        }
        Action::ExecuteCommand => {
            if app.execute_command() {
                return ApplyResult::Quit;
            }
        }
        Action::Yank => app.yank(),
        Action::Paste => app.paste_from_clipboard(),
        Action::ClearCell => app.clear_current_cell(),

        Action::Move(dx, dy) => app.move_cursor(dx, dy),
        Action::NextCell(delta) => app.next_cell(delta),
        Action::HomeCol => app.home_col(),
        Action::EndCol => app.end_col(),
        Action::NextPage => app.change_page(Document::next_page),
        Action::PreviousPage => app.change_page(Document::previous_page),
        Action::FirstPage => app.change_page(Document::first_page),
        Action::LastPage => app.change_page(Document::last_page),

        Action::ToggleTheme => app.toggle_theme(),
        Action::Save => {
            app.save(None);
        }
    }
    ApplyResult::Continue
}

pub fn handle_edit_text(app: &mut App, key: KeyEvent) {
    handle_text_input(&mut app.edit_buffer, &mut app.edit_cursor, key);
}

pub fn handle_command_text(app: &mut App, key: KeyEvent) {
    handle_text_input(&mut app.command_buffer, &mut app.command_cursor, key);
}

/// Bracketed paste from the terminal.
///
/// Text with a tab or line break is a block and lands on the grid. Anything
/// else is typed into the active buffer, or in Normal mode replaces the
/// current cell as one value.
pub fn handle_paste_event(app: &mut App, text: &str) {
    let is_block = text.trim().contains(['\t', '\n']);
    match app.mode {
        Mode::Edit if !is_block => {
            insert_text(&mut app.edit_buffer, &mut app.edit_cursor, text);
        }
        Mode::Command => {
            let line = text.replace(['\r', '\n', '\t'], " ");
            insert_text(&mut app.command_buffer, &mut app.command_cursor, &line);
        }
        Mode::Edit => {
            apply_action(app, Action::Cancel);
            app.paste_text(text);
        }
        Mode::Normal => app.paste_text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::clipboard::MemoryClipboard;
    use csvpad_core::preferences::MemoryPreferences;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        app_with("a,b\n1,2\n3,4")
    }

    fn app_with(text: &str) -> App {
        let mut doc = Document::new();
        doc.load_text(text, None).unwrap();
        App::new(
            doc,
            Box::new(MemoryPreferences::default()),
            Box::new(MemoryClipboard::default()),
        )
    }

    #[test]
    fn text_input_handles_multibyte_chars() {
        let mut buffer = String::from("né");
        let mut cursor = buffer.len();

        handle_text_input(&mut buffer, &mut cursor, key(KeyCode::Left));
        assert_eq!(cursor, 1);
        handle_text_input(&mut buffer, &mut cursor, key(KeyCode::Char('ü')));
        assert_eq!(buffer, "nüé");
        handle_text_input(&mut buffer, &mut cursor, key(KeyCode::Delete));
        assert_eq!(buffer, "nü");
        handle_text_input(&mut buffer, &mut cursor, key(KeyCode::Backspace));
        assert_eq!(buffer, "n");
        assert_eq!(cursor, 1);
    }

    #[test]
    fn text_input_ignores_ctrl_chars() {
        let mut buffer = String::new();
        let mut cursor = 0;
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        handle_text_input(&mut buffer, &mut cursor, ctrl_a);
        assert!(buffer.is_empty());
    }

    #[test]
    fn commit_and_move_edits_next_cell() {
        let mut app = app();
        apply_action(&mut app, Action::EnterEdit);
        app.edit_buffer = "x".to_string();
        apply_action(&mut app, Action::CommitAndMove(1));

        assert_eq!(app.doc.get_cell(1, 0), "x");
        assert_eq!((app.cursor_row, app.cursor_col), (1, 1));
        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(app.edit_buffer, "2");
    }

    #[test]
    fn cancel_discards_edit() {
        let mut app = app();
        apply_action(&mut app, Action::EnterEdit);
        handle_edit_text(&mut app, key(KeyCode::Char('9')));
        apply_action(&mut app, Action::Cancel);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.doc.get_cell(1, 0), "1");
        assert!(!app.doc.is_modified());
    }

    #[test]
    fn typed_quit_command_quits() {
        let mut app = app();
        apply_action(&mut app, Action::EnterCommand);
        handle_command_text(&mut app, key(KeyCode::Char('q')));
        assert_eq!(apply_action(&mut app, Action::ExecuteCommand), ApplyResult::Quit);
    }

    #[test]
    fn bracketed_paste_block_hits_grid() {
        let mut app = app();
        handle_paste_event(&mut app, "7\t8\n9\t10\n");
        assert_eq!(app.doc.get_cell(1, 0), "7");
        assert_eq!(app.doc.get_cell(2, 1), "10");
        assert_eq!(app.status_message, "Pasted 4 cells");
    }

    #[test]
    fn bracketed_paste_with_comma_fills_one_cell() {
        let mut app = app_with("city,country\nOslo,NO");
        handle_paste_event(&mut app, "Paris, FR");
        assert_eq!(app.doc.get_cell(1, 0), "Paris, FR");
        assert_eq!(app.doc.get_cell(1, 1), "NO");
        assert_eq!(app.doc.column_count(), 2);
        assert_eq!(app.status_message, "Pasted 1 cells");
    }

    #[test]
    fn bracketed_paste_word_goes_to_edit_buffer() {
        let mut app = app();
        apply_action(&mut app, Action::EnterEdit);
        handle_paste_event(&mut app, "abc");
        assert_eq!(app.edit_buffer, "1abc");
        assert_eq!(app.edit_cursor, 4);
        assert!(!app.doc.is_modified());
    }
}
