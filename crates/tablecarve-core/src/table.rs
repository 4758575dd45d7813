//! Materialization of a detected rectangle into a header + rows value table.

use crate::error::TableError;
use crate::grid::SheetGrid;
use crate::range::TableRect;
use crate::value::ScalarValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The final header-plus-rows representation handed to the output
/// collaborator. Row 0 of the source rectangle is the header; duplicate
/// header labels are passed through as-is.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ValueTable {
    header: Vec<ScalarValue>,
    rows: Vec<Vec<ScalarValue>>,
}

impl ValueTable {
    /// Build from raw rows: the first row becomes the header, the rest the
    /// data rows. An empty input yields an empty table.
    pub fn from_rows(mut rows: Vec<Vec<ScalarValue>>) -> Self {
        if rows.is_empty() {
            return ValueTable::default();
        }
        let header = rows.remove(0);
        ValueTable { header, rows }
    }

    pub fn header(&self) -> &[ScalarValue] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<ScalarValue>] {
        &self.rows
    }

    /// Number of columns, as defined by the header.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows (the header does not count).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check the shape invariant: every data row as wide as the header.
    pub fn validate(&self) -> Result<(), TableError> {
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != self.header.len() {
                return Err(TableError::RaggedRow {
                    row: i + 1,
                    len: row.len(),
                    expected: self.header.len(),
                });
            }
        }
        Ok(())
    }

    /// Header first, then data rows — the order the output sheet is
    /// populated in.
    pub fn iter_all_rows(&self) -> impl Iterator<Item = &[ScalarValue]> {
        std::iter::once(self.header.as_slice()).chain(self.rows.iter().map(Vec::as_slice))
    }
}

/// Read the rectangle row by row into a [`ValueTable`]. Out-of-range or
/// never-materialized positions read as [`ScalarValue::Empty`].
pub fn read_table(grid: &SheetGrid, rect: &TableRect) -> ValueTable {
    let mut rows = Vec::with_capacity(rect.height() as usize);
    for row in rect.start.0..=rect.end.0 {
        let mut values = Vec::with_capacity(rect.width() as usize);
        for col in rect.start.1..=rect.end.1 {
            values.push(grid.cell(row, col).value.clone());
        }
        rows.push(values);
    }
    ValueTable::from_rows(rows)
}
