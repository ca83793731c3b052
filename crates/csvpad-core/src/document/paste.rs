//! Bulk paste of clipboard blocks onto the grid.

use super::Document;

/// How the field separator of a pasted block is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PastePolicy {
    /// Decide tab-or-comma once from the first line and use it for every line.
    #[default]
    PerBlock,
    /// Decide tab-or-comma separately for each line.
    PerLine,
}

fn separator_for(line: &str) -> char {
    if line.contains('\t') { '\t' } else { ',' }
}

/// Split a pasted block into rows of trimmed values.
///
/// Pasted values are split verbatim: quotes have no special meaning here.
pub fn split_paste_block(text: &str, policy: PastePolicy) -> Vec<Vec<String>> {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    let block_separator = separator_for(lines.first().copied().unwrap_or_default());

    lines
        .into_iter()
        .map(|line| {
            let separator = match policy {
                PastePolicy::PerBlock => block_separator,
                PastePolicy::PerLine => separator_for(line),
            };
            line.split(separator)
                .map(|value| value.trim().to_string())
                .collect()
        })
        .collect()
}

impl Document {
    /// Paste a tab- or comma-separated block with its top-left value at
    /// `(start_row, start_col)`.
    ///
    /// Values that would land beyond the header's last column are dropped,
    /// so a paste never widens the grid; rows grow as needed. Returns the
    /// number of cells written.
    pub fn paste_block(&mut self, text: &str, start_row: usize, start_col: usize) -> usize {
        let width = self.column_count();
        let block = split_paste_block(text, self.options.paste_policy);
        let mut written = 0;

        for (row_offset, values) in block.iter().enumerate() {
            for (col_offset, value) in values.iter().enumerate() {
                let col = start_col + col_offset;
                if col >= width {
                    break;
                }
                self.set_cell(start_row + row_offset, col, value);
                written += 1;
            }
        }

        self.modified = true;
        tracing::debug!(
            rows = block.len(),
            written,
            start_row,
            start_col,
            "pasted block"
        );
        written
    }
}
