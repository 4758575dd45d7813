use thiserror::Error;

/// Violations of the value-table shape invariant.
///
/// Rectangles read straight off a grid are rectangular by construction, so
/// this only fires for tables assembled by hand; the check runs downstream,
/// at write time, rather than during materialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("data row {row} has {len} values, expected {expected} to match the header")]
    RaggedRow {
        /// 1-based data row index (the header is row 0).
        row: usize,
        len: usize,
        expected: usize,
    },
}
