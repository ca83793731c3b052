//! Pagination over the data rows of a document.
//!
//! Row indices are 1-based: row 0 is the header and is never paginated.

use crate::error::{CsvPadError, Result};

/// Rows per page used until the user picks another size.
pub const DEFAULT_ROWS_PER_PAGE: usize = 25;

/// Number of consecutive page numbers shown around the current page.
const PAGE_BUTTON_SPAN: usize = 5;

/// One entry of the page-number strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageButton {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// Pagination state: current page, page size and number of data rows.
///
/// Keeps `1 <= current_page <= total_pages()` at all times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    rows_per_page: usize,
    total_data_rows: usize,
}

impl Pager {
    pub fn new(rows_per_page: usize) -> Result<Self> {
        if rows_per_page == 0 {
            return Err(CsvPadError::InvalidRowsPerPage(rows_per_page));
        }
        Ok(Self {
            current_page: 1,
            rows_per_page,
            total_data_rows: 0,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn total_data_rows(&self) -> usize {
        self.total_data_rows
    }

    /// Number of pages, never less than one.
    pub fn total_pages(&self) -> usize {
        self.total_data_rows.div_ceil(self.rows_per_page).max(1)
    }

    /// First data row on the current page.
    pub fn start_row(&self) -> usize {
        (self.current_page - 1) * self.rows_per_page + 1
    }

    /// Last data row on the current page. Less than `start_row()` when the
    /// document has no data rows.
    pub fn end_row(&self) -> usize {
        (self.start_row() + self.rows_per_page - 1).min(self.total_data_rows)
    }

    /// Move to page `page`. Returns `true` when the view changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    /// Whether the first/previous controls are enabled.
    pub fn can_go_back(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the next/last controls are enabled.
    pub fn can_go_forward(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Change the page size. Always returns to page 1.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) -> Result<()> {
        if rows_per_page == 0 {
            return Err(CsvPadError::InvalidRowsPerPage(rows_per_page));
        }
        self.rows_per_page = rows_per_page;
        self.current_page = 1;
        Ok(())
    }

    /// Update the row count, clamping the current page if it vanished.
    pub fn set_total_data_rows(&mut self, total_data_rows: usize) {
        self.total_data_rows = total_data_rows;
        self.current_page = self.current_page.min(self.total_pages());
    }

    /// Reset to page 1 with a new row count (fresh load).
    pub fn reset(&mut self, total_data_rows: usize) {
        self.total_data_rows = total_data_rows;
        self.current_page = 1;
    }

    /// Page that contains data row `row` (1-based).
    pub fn page_of_row(&self, row: usize) -> usize {
        (row.max(1) - 1) / self.rows_per_page + 1
    }

    /// Page-number strip for the current state.
    pub fn page_buttons(&self) -> Vec<PageButton> {
        page_buttons(self.current_page, self.total_pages())
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            current_page: 1,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            total_data_rows: 0,
        }
    }
}

/// Lay out page buttons: up to five pages centred on `current`, plus the
/// first and last page with an ellipsis wherever pages are skipped.
pub fn page_buttons(current: usize, total_pages: usize) -> Vec<PageButton> {
    let total_pages = total_pages.max(1);
    let current = current.clamp(1, total_pages);
    let reach = PAGE_BUTTON_SPAN / 2;

    let mut start = current.saturating_sub(reach).max(1);
    let mut end = (current + reach).min(total_pages);

    if end - start < PAGE_BUTTON_SPAN - 1 {
        if start == 1 {
            end = (start + PAGE_BUTTON_SPAN - 1).min(total_pages);
        } else if end == total_pages {
            start = end.saturating_sub(PAGE_BUTTON_SPAN - 1).max(1);
        }
    }

    let mut buttons = Vec::with_capacity(PAGE_BUTTON_SPAN + 4);
    if start > 1 {
        buttons.push(PageButton::Page {
            number: 1,
            active: false,
        });
        if start > 2 {
            buttons.push(PageButton::Ellipsis);
        }
    }

    for number in start..=end {
        buttons.push(PageButton::Page {
            number,
            active: number == current,
        });
    }

    if end < total_pages {
        if end < total_pages - 1 {
            buttons.push(PageButton::Ellipsis);
        }
        buttons.push(PageButton::Page {
            number: total_pages,
            active: false,
        });
    }

    buttons
}
