//! tablecarve — extract tables whose boundaries are drawn with cell
//! borders (and merged cells) from one workbook into another, one sheet
//! per detected table.
//!
//! The heavy lifting lives in [`tablecarve_core`] (grid passes) and
//! [`tablecarve_io`] (the spreadsheet backend seam); this crate wires them
//! together and ships the CLI.

pub mod extract;

pub use extract::{ExtractError, ExtractStats, Extractor};

pub use tablecarve_core::{
    Borders, Cell, MergeRange, ScalarValue, SheetGrid, TableError, TableRect, ValueTable,
    extract_tables,
};
#[cfg(feature = "umya")]
pub use tablecarve_io::UmyaAdapter;
pub use tablecarve_io::{
    CellData, IoError, SaveDestination, SheetData, SpreadsheetIO, SpreadsheetReader,
    SpreadsheetWriter,
};
