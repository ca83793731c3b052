//! Keymap translation layer.
//!
//! Keys become [`Action`]s here; the app never looks at raw key events
//! except for text entry.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::Mode;

/// Actions that can be triggered by key presses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Leave Edit or Command mode, discarding the buffer.
    Cancel,
    /// Enter Edit mode for the current cell.
    EnterEdit,
    /// Commit the current edit and return to Normal mode.
    CommitEdit,
    /// Commit the current edit and move to the next (1) or previous (-1) cell.
    CommitAndMove(isize),
    /// Enter Command mode (`:` prompt).
    EnterCommand,
    /// Execute the command in the command buffer.
    ExecuteCommand,
    /// Copy the current cell to the clipboard.
    Yank,
    /// Paste the clipboard as a block at the cursor.
    Paste,
    /// Empty the current cell.
    ClearCell,
    /// Move cursor by (dx, dy), crossing page boundaries.
    Move(i32, i32),
    /// Tab-style movement that wraps across rows.
    NextCell(isize),
    HomeCol,
    EndCol,
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    ToggleTheme,
    Save,
}

/// One-line key reference for the status bar.
pub fn status_hint() -> &'static str {
    "hjkl:move  Tab:next  i:edit  y:yank  p:paste  n/N:page  g/G:first/last  t:theme  :w:save  :q:quit"
}

pub fn translate(mode: Mode, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match mode {
        Mode::Normal => match key.code {
            KeyCode::Char('s') if ctrl => Some(Action::Save),
            KeyCode::Char('v') if ctrl => Some(Action::Paste),

            KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(0, -1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(0, 1)),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(-1, 0)),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(1, 0)),
            KeyCode::Tab => Some(Action::NextCell(1)),
            KeyCode::BackTab => Some(Action::NextCell(-1)),
            KeyCode::Home => Some(Action::HomeCol),
            KeyCode::End => Some(Action::EndCol),

            KeyCode::PageDown | KeyCode::Char('n') => Some(Action::NextPage),
            KeyCode::PageUp | KeyCode::Char('N') => Some(Action::PreviousPage),
            KeyCode::Char('g') => Some(Action::FirstPage),
            KeyCode::Char('G') => Some(Action::LastPage),

            KeyCode::Enter | KeyCode::Char('i') => Some(Action::EnterEdit),
            KeyCode::Char('x') | KeyCode::Delete => Some(Action::ClearCell),
            KeyCode::Char(':') => Some(Action::EnterCommand),
            KeyCode::Char('y') => Some(Action::Yank),
            KeyCode::Char('p') => Some(Action::Paste),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            _ => None,
        },

        Mode::Edit => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::CommitEdit),
            KeyCode::Tab => Some(Action::CommitAndMove(1)),
            KeyCode::BackTab => Some(Action::CommitAndMove(-1)),
            _ => None,
        },

        Mode::Command => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::ExecuteCommand),
            _ => None,
        },
    }
}
