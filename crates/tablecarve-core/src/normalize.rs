//! Merge normalization: resolve every merged range into a filled,
//! individually bordered block of plain cells.

use crate::border::paint_range;
use crate::grid::SheetGrid;

/// Resolve all remaining merge ranges. For each range: capture the anchor
/// (top-left) value, drop the range from the merge list, force borders on
/// the full rectangle, then assign the anchor value to every cell of the
/// rectangle that is still empty. Cells holding a pre-existing distinct
/// value are left untouched.
///
/// Ranges in a well-formed sheet do not overlap, so processing order is the
/// stored order. Values are plain scalars throughout — the input
/// collaborator already resolved any formula to its computed value — so no
/// separate re-materialization pass is needed afterwards.
///
/// Idempotent: on a grid with no merges this is a no-op.
pub fn unmerge_and_fill(grid: &mut SheetGrid) {
    let merges = grid.take_merges();
    for merge in merges {
        let (anchor_row, anchor_col) = merge.anchor();
        let anchor_value = grid.cell(anchor_row, anchor_col).value.clone();

        paint_range(grid, &merge);

        for (row, col) in merge.cells() {
            let cell = grid.cell_mut(row, col);
            if cell.value.is_empty() {
                cell.value = anchor_value.clone();
            }
        }
    }
}
