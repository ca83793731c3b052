//! Session query interface for display layers.

use super::Document;
use super::pager::PageButton;
use crate::error::Result;

/// One data row of the visible page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowRow {
    /// Grid row index (1-based, the header is row 0)
    pub index: usize,
    /// Exactly one value per header column
    pub fields: Vec<String>,
}

/// Everything a display layer needs to draw the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub header_fields: Vec<String>,
    pub rows: Vec<WindowRow>,
    pub start_row: usize,
    pub end_row: usize,
    pub total_data_rows: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub rows_per_page: usize,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub page_buttons: Vec<PageButton>,
    pub modified: bool,
}

impl PageWindow {
    /// Column title, falling back to "Column N" for blank header cells.
    pub fn column_label(&self, col: usize) -> String {
        match self.header_fields.get(col) {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("Column {}", col + 1),
        }
    }

    /// Status text such as "Showing 26-50 of 100 rows".
    pub fn summary(&self) -> String {
        if self.total_data_rows == 0 {
            return "No data rows".to_string();
        }
        format!(
            "Showing {}-{} of {} rows",
            self.start_row, self.end_row, self.total_data_rows
        )
    }
}

impl Document {
    /// Build the visible page from the current grid and pagination state.
    pub fn page_window(&self) -> PageWindow {
        let width = self.column_count();
        let start_row = self.pager.start_row();
        let end_row = self.pager.end_row();

        let rows = (start_row..=end_row)
            .map(|index| WindowRow {
                index,
                fields: (0..width)
                    .map(|col| self.get_cell(index, col).to_string())
                    .collect(),
            })
            .collect();

        PageWindow {
            header_fields: self.header().to_vec(),
            rows,
            start_row,
            end_row,
            total_data_rows: self.pager.total_data_rows(),
            total_pages: self.pager.total_pages(),
            current_page: self.pager.current_page(),
            rows_per_page: self.pager.rows_per_page(),
            can_go_back: self.pager.can_go_back(),
            can_go_forward: self.pager.can_go_forward(),
            page_buttons: self.pager.page_buttons(),
            modified: self.modified,
        }
    }

    /// Jump to `page`. Returns `true` when the visible window changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.pager.go_to_page(page)
    }

    pub fn first_page(&mut self) -> bool {
        self.pager.first_page()
    }

    pub fn previous_page(&mut self) -> bool {
        self.pager.previous_page()
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next_page()
    }

    pub fn last_page(&mut self) -> bool {
        self.pager.last_page()
    }

    /// Change the page size and return to the first page.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) -> Result<()> {
        self.pager.set_rows_per_page(rows_per_page)?;
        self.options.rows_per_page = rows_per_page;
        Ok(())
    }
}
