//! UI rendering

use super::app::{App, Mode};
use super::keymap::status_hint;
use csvpad_core::preferences::Theme;
use csvpad_core::{PageButton, PageWindow};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

pub(crate) const CELL_BAR_HEIGHT: u16 = 3;
pub(crate) const GRID_MIN_HEIGHT: u16 = 5;
pub(crate) const PAGER_HEIGHT: u16 = 1;
pub(crate) const STATUS_BAR_HEIGHT: u16 = 1;
pub(crate) const ROW_HEADER_WIDTH: u16 = 4;
pub(crate) const GRID_COLUMN_SPACING: u16 = 1;

pub(crate) fn split_main_chunks(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_BAR_HEIGHT),
            Constraint::Min(GRID_MIN_HEIGHT),
            Constraint::Length(PAGER_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Width of the row-number column; grows for large row indices.
pub(crate) fn row_header_width(window: &PageWindow) -> u16 {
    let digits = window.end_row.max(1).to_string().len() as u16;
    digits.max(ROW_HEADER_WIDTH)
}

/// How many data columns fit in a bordered grid of `grid_width`.
pub(crate) fn visible_columns(grid_width: u16, row_header: u16, col_width: usize) -> usize {
    let available = grid_width.saturating_sub(row_header + GRID_COLUMN_SPACING + 2) as usize;
    (available / (col_width + GRID_COLUMN_SPACING as usize)).max(1)
}

/// Page-number strip such as `1 .. 3 4 [5] 6 7`.
pub(crate) fn page_strip(buttons: &[PageButton]) -> String {
    buttons
        .iter()
        .map(|button| match button {
            PageButton::Page {
                number,
                active: true,
            } => format!("[{}]", number),
            PageButton::Page { number, .. } => number.to_string(),
            PageButton::Ellipsis => "..".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

struct Palette {
    base: Style,
    dim: Style,
    header: Style,
    cursor: Style,
    cursor_axis: Style,
    changed: Style,
    error: Style,
    notice: Style,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                dim: Style::default().fg(Color::Gray).bg(Color::White),
                header: Style::default()
                    .fg(Color::Blue)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
                cursor: Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                cursor_axis: Style::default().fg(Color::Black).bg(Color::LightBlue),
                changed: Style::default().fg(Color::Magenta).bg(Color::White),
                error: Style::default().fg(Color::Red).bg(Color::White),
                notice: Style::default().fg(Color::Blue).bg(Color::White),
            },
            Theme::Dark => Self {
                base: Style::default().fg(Color::Gray).bg(Color::Black),
                dim: Style::default().fg(Color::DarkGray).bg(Color::Black),
                header: Style::default()
                    .fg(Color::Cyan)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                cursor: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                cursor_axis: Style::default().fg(Color::Black).bg(Color::White),
                changed: Style::default().fg(Color::Yellow).bg(Color::Black),
                error: Style::default().fg(Color::Red).bg(Color::Black),
                notice: Style::default().fg(Color::Yellow).bg(Color::Black),
            },
        }
    }
}

/// Draw the application UI
pub fn draw(f: &mut Frame, app: &mut App) {
    let [cell_area, grid_area, pager_area, status_area] = split_main_chunks(f.area());
    let window = app.doc.page_window();
    let palette = Palette::for_theme(app.theme);

    app.visible_cols = visible_columns(grid_area.width, row_header_width(&window), app.col_width);
    app.update_viewport();

    draw_cell_bar(f, app, &window, &palette, cell_area);
    draw_grid(f, app, &window, &palette, grid_area);
    draw_pager(f, &window, &palette, pager_area);
    draw_status_bar(f, app, &window, &palette, status_area);
}

fn draw_cell_bar(f: &mut Frame, app: &App, window: &PageWindow, palette: &Palette, area: Rect) {
    let cell_name = format!("{} #{}", window.column_label(app.cursor_col), app.cursor_row);

    let content = match app.mode {
        Mode::Edit => {
            let (before, after) = app.edit_buffer.split_at(app.edit_cursor);
            format!("{}: {}│{}", cell_name, before, after)
        }
        Mode::Command => {
            let (before, after) = app.command_buffer.split_at(app.command_cursor);
            format!(":{}│{}", before, after)
        }
        Mode::Normal if app.doc.is_empty() => String::new(),
        Mode::Normal => {
            let value = app.current_value();
            if value.is_empty() {
                format!("{}: (empty)", cell_name)
            } else {
                format!("{}: {}", cell_name, value)
            }
        }
    };

    let (title, border) = match app.mode {
        Mode::Edit => (" Edit ", palette.notice),
        Mode::Command => (" Command ", palette.header),
        Mode::Normal => (" Cell ", palette.dim),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border)
        .style(palette.base);
    f.render_widget(Paragraph::new(content).block(block), area);
}

fn draw_grid(f: &mut Frame, app: &App, window: &PageWindow, palette: &Palette, area: Rect) {
    let title = format!(" {} ", app.doc.filename().unwrap_or("csvpad"));
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(palette.base);

    if app.doc.is_empty() {
        let hint = Paragraph::new("No data loaded. Open a file with :e <path>")
            .style(palette.dim)
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let width = app.doc.column_count();
    let columns: Vec<usize> = (app.viewport_col..width).take(app.visible_cols).collect();

    let mut header_cells = vec![Cell::from(" ")];
    for &col in &columns {
        let style = if col == app.cursor_col {
            palette.cursor_axis
        } else {
            palette.header
        };
        header_cells.push(Cell::from(window.column_label(col)).style(style));
    }
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = window
        .rows
        .iter()
        .map(|row| {
            let row_style = if row.index == app.cursor_row {
                palette.cursor_axis
            } else {
                palette.dim
            };
            let mut cells = vec![Cell::from(row.index.to_string()).style(row_style)];
            for &col in &columns {
                let value = row.fields[col].as_str();
                let style = if row.index == app.cursor_row && col == app.cursor_col {
                    palette.cursor
                } else if app.doc.is_cell_changed(row.index, col) {
                    palette.changed
                } else {
                    palette.base
                };
                cells.push(Cell::from(value.to_string()).style(style));
            }
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(row_header_width(window))];
    widths.extend(columns.iter().map(|_| Constraint::Length(app.col_width as u16)));

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(GRID_COLUMN_SPACING);
    f.render_widget(table, area);
}

fn draw_pager(f: &mut Frame, window: &PageWindow, palette: &Palette, area: Rect) {
    let arrow = |label: &'static str, enabled: bool| {
        Span::styled(label, if enabled { palette.header } else { palette.dim })
    };

    let line = Line::from(vec![
        arrow(" < ", window.can_go_back),
        Span::styled(page_strip(&window.page_buttons), palette.base),
        arrow(" > ", window.can_go_forward),
        Span::styled(
            format!("  {}  ({} per page)", window.summary(), window.rows_per_page),
            palette.dim,
        ),
    ]);
    f.render_widget(Paragraph::new(line).style(palette.base), area);
}

fn draw_status_bar(f: &mut Frame, app: &App, window: &PageWindow, palette: &Palette, area: Rect) {
    let (status, style) = if app.status_message.starts_with("Error") {
        (app.status_message.clone(), palette.error)
    } else if !app.status_message.is_empty() {
        (app.status_message.clone(), palette.notice)
    } else {
        let modified = if window.modified { " [+]" } else { "" };
        (
            format!("{}{}  |  {}", app.doc.export_filename(), modified, status_hint()),
            palette.dim,
        )
    };

    let paragraph = Paragraph::new(Line::from(vec![Span::styled(status, style)]))
        .style(palette.base);
    f.render_widget(paragraph, area);
}
