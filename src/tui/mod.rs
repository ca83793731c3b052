//! Terminal UI

mod actions;
mod app;
mod clipboard;
mod input;
mod keymap;
mod ui;

use crate::config::TomlPreferences;
use app::App;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use csvpad_core::Document;
use ratatui::{Terminal, backend::CrosstermBackend};

/// Take over the terminal and edit `doc` until the user quits.
pub fn run(doc: Document, status: String) -> anyhow::Result<()> {
    let mut app = App::new(
        doc,
        Box::new(TomlPreferences::open_default()),
        clipboard::default_clipboard(),
    );
    app.status_message = status;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = input::run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result?;
    tracing::info!(unsaved = app.unsaved, "session ended");
    Ok(())
}
