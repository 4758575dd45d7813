use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::range::MergeRange;
use crate::value::ScalarValue;

/// Per-edge "styled" flags for one cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Borders {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Borders {
    pub const NONE: Borders = Borders {
        left: false,
        right: false,
        top: false,
        bottom: false,
    };

    /// All four edges styled.
    pub const BOX: Borders = Borders {
        left: true,
        right: true,
        top: true,
        bottom: true,
    };

    /// At least one edge styled — the "bordered cell" predicate.
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// One grid cell: scalar content plus per-edge border flags.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Cell {
    pub value: ScalarValue,
    pub borders: Borders,
}

impl Cell {
    /// Sentinel returned for positions the grid has never materialized,
    /// including anything outside the tracked bounds.
    pub const EMPTY: Cell = Cell {
        value: ScalarValue::Empty,
        borders: Borders::NONE,
    };

    pub fn with_value(value: impl Into<ScalarValue>) -> Self {
        Cell {
            value: value.into(),
            borders: Borders::NONE,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && !self.borders.any()
    }
}

/// In-memory model of one sheet: a sparse cell map with tracked bounds and
/// the sheet's still-active merge ranges.
///
/// Only materialized cells are stored. Reads through [`SheetGrid::cell`] are
/// edge-guarded: any absent or out-of-range position yields [`Cell::EMPTY`],
/// since adjacency and border-growth checks routinely probe one step past
/// the sheet's extent. Writes go through [`SheetGrid::cell_mut`], which
/// materializes the position and grows the bounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetGrid {
    cells: BTreeMap<(u32, u32), Cell>,
    merges: Vec<MergeRange>,
    /// Maximum row index seen (1-based).
    max_row: u32,
    /// Maximum column index seen (1-based).
    max_col: u32,
}

impl SheetGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` while no cell has ever been materialized.
    pub fn bounds(&self) -> Option<(u32, u32)> {
        if self.max_row == 0 || self.max_col == 0 {
            None
        } else {
            Some((self.max_row, self.max_col))
        }
    }

    /// Grow the tracked bounds without materializing cells. Used when the
    /// source sheet reports dimensions beyond the last stored cell.
    pub fn set_bounds(&mut self, rows: u32, cols: u32) {
        self.max_row = self.max_row.max(rows);
        self.max_col = self.max_col.max(cols);
    }

    /// Edge-guarded read. Row/column 0, positions past the bounds, and
    /// never-written positions all return the empty sentinel.
    pub fn cell(&self, row: u32, col: u32) -> &Cell {
        if row == 0 || col == 0 {
            return &Cell::EMPTY;
        }
        self.cells.get(&(row, col)).unwrap_or(&Cell::EMPTY)
    }

    /// Materializing write access. Panics on 0 indices (the grid is 1-based).
    pub fn cell_mut(&mut self, row: u32, col: u32) -> &mut Cell {
        assert!(row >= 1 && col >= 1, "grid positions are 1-based");
        self.max_row = self.max_row.max(row);
        self.max_col = self.max_col.max(col);
        self.cells.entry((row, col)).or_default()
    }

    pub fn set_value(&mut self, row: u32, col: u32, value: impl Into<ScalarValue>) {
        self.cell_mut(row, col).value = value.into();
    }

    pub fn set_borders(&mut self, row: u32, col: u32, borders: Borders) {
        self.cell_mut(row, col).borders = borders;
    }

    /// Positions that currently hold a materialized cell, row-major.
    pub fn positions(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.cells.keys().copied()
    }

    pub fn merges(&self) -> &[MergeRange] {
        &self.merges
    }

    pub fn add_merge(&mut self, merge: MergeRange) {
        self.set_bounds(merge.end_row, merge.end_col);
        self.merges.push(merge);
    }

    /// Remove and return every active merge range.
    pub fn take_merges(&mut self) -> Vec<MergeRange> {
        std::mem::take(&mut self.merges)
    }

    pub fn retain_merges(&mut self, f: impl FnMut(&MergeRange) -> bool) {
        self.merges.retain(f);
    }
}
