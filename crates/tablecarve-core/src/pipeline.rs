//! The single-sheet pipeline, start to finish.

use crate::border::{paint_adjacency_borders, strip_unbordered_and_loose_merges};
use crate::detect::find_bordered_tables;
use crate::grid::SheetGrid;
use crate::normalize::unmerge_and_fill;
use crate::table::{ValueTable, read_table};

/// Run the full extraction over one grid and return every detected table as
/// a value table, in detection (row-major corner) order.
///
/// The unbordered-strip gate runs first, on the source sheet's original
/// border styling only; adjacency painting derives new borders after it.
pub fn extract_tables(grid: &mut SheetGrid) -> Vec<ValueTable> {
    strip_unbordered_and_loose_merges(grid);
    paint_adjacency_borders(grid);
    unmerge_and_fill(grid);

    find_bordered_tables(grid)
        .iter()
        .map(|rect| read_table(grid, rect))
        .collect()
}
