use super::Document;
use crate::storage::Record;

fn field_at(records: &[Record], row: usize, col: usize) -> &str {
    records
        .get(row)
        .and_then(|record| record.get(col))
        .map_or("", String::as_str)
}

impl Document {
    /// Read a cell. Cells outside the grid or past a short record read as "".
    pub fn get_cell(&self, row: usize, col: usize) -> &str {
        field_at(&self.records, row, col)
    }

    /// Write a cell, materializing any missing rows up to `row` first.
    ///
    /// New rows get one empty field per header column; a record shorter
    /// than `col` is padded with empty fields.
    pub fn set_cell(&mut self, row: usize, col: usize, value: &str) {
        let width = self.column_count();
        while self.records.len() <= row {
            self.records.push(vec![String::new(); width]);
        }

        let record = &mut self.records[row];
        if record.len() <= col {
            record.resize(col + 1, String::new());
        }
        record[col] = value.to_string();

        self.modified = true;
        self.pager
            .set_total_data_rows(self.records.len().saturating_sub(1));
    }

    /// Edit a single cell from the display layer.
    pub fn edit_cell(&mut self, row: usize, col: usize, value: &str) {
        tracing::trace!(row, col, "edit cell");
        self.set_cell(row, col, value);
    }

    /// Cell reached from `(row, col)` by moving `delta` columns.
    ///
    /// Moving past the last column wraps to the first column of the next
    /// row and vice versa. Returns `None` when the target falls outside the
    /// data rows.
    pub fn next_cell(&self, row: usize, col: usize, delta: isize) -> Option<(usize, usize)> {
        let width = self.column_count() as isize;
        if width == 0 {
            return None;
        }

        let mut next_row = row as isize;
        let mut next_col = col as isize + delta;
        if next_col >= width {
            next_col = 0;
            next_row += 1;
        } else if next_col < 0 {
            next_col = width - 1;
            next_row -= 1;
        }

        if next_row < 1 || next_row as usize > self.row_count() {
            return None;
        }
        Some((next_row as usize, next_col as usize))
    }

    /// Discard all edits and return to the grid as it was loaded.
    pub fn revert_to_snapshot(&mut self) {
        self.records = self.snapshot.clone();
        self.modified = false;
        self.pager
            .set_total_data_rows(self.records.len().saturating_sub(1));
        tracing::info!("reverted to loaded snapshot");
    }

    /// Whether `(row, col)` differs from the loaded snapshot. Absent cells
    /// read as empty text.
    pub fn is_cell_changed(&self, row: usize, col: usize) -> bool {
        field_at(&self.records, row, col) != field_at(&self.snapshot, row, col)
    }

    /// Cells whose value differs from the loaded snapshot, in row-major order.
    ///
    /// Absent cells compare as empty text, so padding alone is not a change.
    pub fn changed_cells(&self) -> Vec<(usize, usize)> {
        let rows = self.records.len().max(self.snapshot.len());
        let mut changed = Vec::new();

        for row in 0..rows {
            let current = self.records.get(row).map_or(0, Vec::len);
            let original = self.snapshot.get(row).map_or(0, Vec::len);
            for col in 0..current.max(original) {
                if self.is_cell_changed(row, col) {
                    changed.push((row, col));
                }
            }
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::Document;
    use crate::storage::Record;
    use pretty_assertions::assert_eq;

    fn rows(records: &[&[&str]]) -> Vec<Record> {
        records
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn three_rows() -> Document {
        let mut doc = Document::new();
        doc.load(rows(&[&["a", "b", "c"], &["", "", ""], &["", "", ""]]));
        doc
    }

    #[test]
    fn test_get_cell_out_of_range_reads_empty() {
        let mut doc = Document::new();
        assert_eq!(doc.get_cell(0, 0), "");
        doc.load(rows(&[&["a", "b"], &["1"]]));
        assert_eq!(doc.get_cell(1, 0), "1");
        assert_eq!(doc.get_cell(1, 1), "");
        assert_eq!(doc.get_cell(9, 0), "");
    }

    #[test]
    fn test_set_cell_sparse_fill() {
        let mut doc = three_rows();
        doc.set_cell(5, 1, "x");

        assert_eq!(doc.row_count(), 5);
        assert_eq!(doc.records()[3], vec!["", "", ""]);
        assert_eq!(doc.records()[4], vec!["", "", ""]);
        assert_eq!(doc.get_cell(5, 1), "x");
        assert_eq!(doc.records()[5], vec!["", "x", ""]);
        assert!(doc.is_modified());
    }

    #[test]
    fn test_set_cell_pads_short_record() {
        let mut doc = Document::new();
        doc.load(rows(&[&["a", "b", "c"], &["1"]]));
        doc.set_cell(1, 4, "z");
        assert_eq!(doc.records()[1], vec!["1", "", "", "", "z"]);
        assert_eq!(doc.column_count(), 3);
    }

    #[test]
    fn test_set_cell_existing_row_keeps_row_count() {
        let mut doc = three_rows();
        doc.set_cell(2, 0, "v");
        assert_eq!(doc.row_count(), 2);
        assert_eq!(doc.get_cell(2, 0), "v");
    }

    #[test]
    fn test_set_cell_on_empty_document() {
        let mut doc = Document::new();
        doc.set_cell(2, 1, "x");
        assert_eq!(doc.records(), &rows(&[&[], &[], &["", "x"]])[..]);
        assert_eq!(doc.row_count(), 2);
    }

    #[test]
    fn test_set_cell_never_touches_snapshot() {
        let mut doc = three_rows();
        doc.set_cell(1, 0, "changed");
        doc.set_cell(7, 2, "far");
        assert_eq!(doc.snapshot().len(), 3);
        assert_eq!(doc.snapshot()[1][0], "");
    }

    #[test]
    fn test_load_clears_modified() {
        let mut doc = three_rows();
        doc.edit_cell(1, 1, "x");
        assert!(doc.is_modified());
        doc.load(rows(&[&["h"]]));
        assert!(!doc.is_modified());
        assert_eq!(doc.row_count(), 0);
        assert_eq!(doc.column_count(), 1);
    }

    #[test]
    fn test_revert_to_snapshot() {
        let mut doc = three_rows();
        doc.set_cell(1, 0, "x");
        doc.set_cell(10, 0, "y");
        doc.revert_to_snapshot();
        assert!(!doc.is_modified());
        assert_eq!(doc.row_count(), 2);
        assert_eq!(doc.get_cell(1, 0), "");
        assert!(doc.changed_cells().is_empty());
    }

    #[test]
    fn test_changed_cells() {
        let mut doc = Document::new();
        doc.load(rows(&[&["a", "b"], &["1"]]));
        doc.set_cell(1, 1, "");
        assert!(doc.changed_cells().is_empty());

        doc.set_cell(1, 0, "2");
        doc.set_cell(3, 1, "new");
        assert_eq!(doc.changed_cells(), vec![(1, 0), (3, 1)]);
    }

    #[test]
    fn test_is_cell_changed() {
        let mut doc = Document::new();
        doc.load(rows(&[&["a", "b"], &["1"]]));
        doc.set_cell(1, 1, "");
        assert!(!doc.is_cell_changed(1, 1));

        doc.set_cell(2, 0, "x");
        assert!(doc.is_cell_changed(2, 0));
        assert!(!doc.is_cell_changed(2, 1));
        assert!(!doc.is_cell_changed(1, 0));
        assert!(!doc.is_cell_changed(9, 9));
    }

    #[test]
    fn test_next_cell_wraps_rows() {
        let doc = three_rows();
        assert_eq!(doc.next_cell(1, 0, 1), Some((1, 1)));
        assert_eq!(doc.next_cell(1, 2, 1), Some((2, 0)));
        assert_eq!(doc.next_cell(2, 0, -1), Some((1, 2)));
        assert_eq!(doc.next_cell(1, 0, -1), None);
        assert_eq!(doc.next_cell(2, 2, 1), None);
        assert_eq!(doc.next_cell(1, 1, 0), Some((1, 1)));
    }
}
