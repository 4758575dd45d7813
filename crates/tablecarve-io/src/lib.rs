//! Spreadsheet I/O seam for the tablecarve extractor: backend-agnostic
//! reader/writer traits plus the xlsx backend.

pub mod a1;
pub mod backends;
pub mod error;
pub mod traits;

#[cfg(feature = "umya")]
pub use backends::UmyaAdapter;
pub use a1::{col_to_a1, coord_to_a1, parse_a1, parse_a1_range};
pub use error::IoError;
pub use traits::{
    AccessGranularity, BackendCaps, CellData, SaveDestination, SheetData, SpreadsheetIO,
    SpreadsheetReader, SpreadsheetWriter,
};

// Re-export for convenience
pub use tablecarve_core::{Borders, Cell, MergeRange, ScalarValue, SheetGrid};
