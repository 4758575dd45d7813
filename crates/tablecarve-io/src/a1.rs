//! A1-notation helpers: backends report merge ranges as `"A1:B2"` strings
//! and error messages quote cell positions the way users see them.

use crate::error::IoError;
use tablecarve_core::MergeRange;

/// 1-based column number to its letter form: 1 → `A`, 27 → `AA`.
pub fn col_to_a1(col: u32) -> String {
    debug_assert!(col >= 1, "columns are 1-based");
    let mut col = col;
    let mut out = Vec::new();
    while col > 0 {
        let rem = ((col - 1) % 26) as u8;
        out.push(b'A' + rem);
        col = (col - 1) / 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// (row, col) to `"B3"` form.
pub fn coord_to_a1(row: u32, col: u32) -> String {
    format!("{}{row}", col_to_a1(col))
}

/// Parse a single `"B3"` reference (absolute `$` markers tolerated) into
/// 1-based (row, col).
pub fn parse_a1(cell: &str) -> Result<(u32, u32), IoError> {
    let cleaned: String = cell.chars().filter(|&ch| ch != '$').collect();
    let split = cleaned
        .find(|ch: char| ch.is_ascii_digit())
        .ok_or_else(|| IoError::InvalidRange(cell.to_string()))?;
    let (letters, digits) = cleaned.split_at(split);
    if letters.is_empty() || digits.is_empty() {
        return Err(IoError::InvalidRange(cell.to_string()));
    }

    let mut col: u32 = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return Err(IoError::InvalidRange(cell.to_string()));
        }
        col = col * 26 + (ch.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }
    let row: u32 = digits
        .parse()
        .map_err(|_| IoError::InvalidRange(cell.to_string()))?;
    if row == 0 || col == 0 {
        return Err(IoError::InvalidRange(cell.to_string()));
    }
    Ok((row, col))
}

/// Parse `"A1:B2"` (or a bare `"A1"`, treated as a 1×1 span) into a
/// [`MergeRange`].
pub fn parse_a1_range(range: &str) -> Result<MergeRange, IoError> {
    let (start, end) = match range.split_once(':') {
        Some((s, e)) => (s, e),
        None => (range, range),
    };
    let (start_row, start_col) = parse_a1(start)?;
    let (end_row, end_col) = parse_a1(end)?;
    MergeRange::new(start_row, start_col, end_row, end_col)
        .map_err(|_| IoError::InvalidRange(range.to_string()))
}
