use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;
use std::io;

use super::actions::{
    ApplyResult, apply_action, handle_command_text, handle_edit_text, handle_paste_event,
};
use super::app::{App, Mode};
use super::keymap::translate;
use super::ui;

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (Windows reports Press + Release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if app.mode == Mode::Normal {
                    app.status_message.clear();
                }

                if let Some(action) = translate(app.mode, key) {
                    if apply_action(app, action) == ApplyResult::Quit {
                        return Ok(());
                    }
                    continue;
                }

                match app.mode {
                    Mode::Edit => handle_edit_text(app, key),
                    Mode::Command => handle_command_text(app, key),
                    Mode::Normal => {}
                }
            }
            Event::Paste(text) => handle_paste_event(app, &text),
            _ => {}
        }
    }
}
