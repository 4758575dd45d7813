//! Border passes: the adjacency heuristic that promotes contiguous values
//! into bordered regions, unconditional range painting for merge
//! normalization, and the eligibility gate that strips everything the source
//! sheet never bordered.

use crate::grid::{Borders, SheetGrid};
use crate::range::MergeRange;

/// Stamp all four edges styled on every cell whose value is non-empty and
/// which has at least one non-empty cardinal neighbor. Missing neighbors at
/// the sheet edge count as empty. Isolated values are left untouched.
pub fn paint_adjacency_borders(grid: &mut SheetGrid) {
    let Some((max_row, max_col)) = grid.bounds() else {
        return;
    };

    let mut to_stamp = Vec::new();
    for row in 1..=max_row {
        for col in 1..=max_col {
            if grid.cell(row, col).value.is_empty() {
                continue;
            }
            // col - 1 and row - 1 underflow to 0 at the sheet edge; the
            // sentinel accessor reports those positions as empty.
            let has_neighbor = !grid.cell(row, col - 1).value.is_empty()
                || !grid.cell(row, col + 1).value.is_empty()
                || !grid.cell(row - 1, col).value.is_empty()
                || !grid.cell(row + 1, col).value.is_empty();
            if has_neighbor {
                to_stamp.push((row, col));
            }
        }
    }

    for (row, col) in to_stamp {
        grid.cell_mut(row, col).borders = Borders::BOX;
    }
}

/// Unconditionally stamp all four edges styled on every cell of the
/// rectangle. Merged blocks become fully enclosed regardless of adjacency.
pub fn paint_range(grid: &mut SheetGrid, range: &MergeRange) {
    for (row, col) in range.cells() {
        grid.cell_mut(row, col).borders = Borders::BOX;
    }
}

/// The eligibility gate, driven by the source sheet's pre-existing border
/// styling: compute the set of cells with at least one styled edge, unmerge
/// every range that reaches outside that set, then clear the value of every
/// cell outside it.
///
/// Runs before [`paint_adjacency_borders`] in the pipeline, so a value
/// without an original border is cleared even when adjacency would have
/// bordered it later.
pub fn strip_unbordered_and_loose_merges(grid: &mut SheetGrid) {
    let Some((max_row, max_col)) = grid.bounds() else {
        grid.take_merges();
        return;
    };

    let idx = |row: u32, col: u32| ((row - 1) as usize) * (max_col as usize) + (col - 1) as usize;

    let mut bordered = vec![false; (max_row as usize) * (max_col as usize)];
    for (row, col) in grid.positions() {
        if grid.cell(row, col).borders.any() {
            bordered[idx(row, col)] = true;
        }
    }

    let in_bounds = |row: u32, col: u32| row >= 1 && row <= max_row && col >= 1 && col <= max_col;
    grid.retain_merges(|m| {
        m.cells()
            .all(|(row, col)| in_bounds(row, col) && bordered[idx(row, col)])
    });

    let to_clear: Vec<(u32, u32)> = grid
        .positions()
        .filter(|&(row, col)| !bordered[idx(row, col)])
        .collect();
    for (row, col) in to_clear {
        grid.cell_mut(row, col).value = crate::value::ScalarValue::Empty;
    }
}
