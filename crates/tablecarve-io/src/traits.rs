use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::Path;

use tablecarve_core::{Borders, Cell, MergeRange, ScalarValue, SheetGrid};

/// One cell as a backend reports or accepts it: an optional computed value
/// plus per-edge border flags. Border-only cells (styled but valueless) are
/// meaningful input and must not be dropped by readers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellData {
    pub value: Option<ScalarValue>,
    pub borders: Borders,
}

impl CellData {
    pub fn from_value<V: Into<ScalarValue>>(value: V) -> Self {
        Self {
            value: Some(value.into()),
            borders: Borders::NONE,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.borders.any() && self.value.as_ref().is_none_or(ScalarValue::is_empty)
    }
}

/// Everything a reader reports about one sheet.
#[derive(Clone, Debug, Default)]
pub struct SheetData {
    pub cells: BTreeMap<(u32, u32), CellData>,
    /// `(max_row, max_col)`, 1-based; `None` for a sheet with no content.
    pub dimensions: Option<(u32, u32)>,
    pub merged_cells: Vec<MergeRange>,
}

impl From<SheetData> for SheetGrid {
    fn from(data: SheetData) -> Self {
        let mut grid = SheetGrid::new();
        if let Some((rows, cols)) = data.dimensions {
            grid.set_bounds(rows, cols);
        }
        for ((row, col), cell_data) in data.cells {
            *grid.cell_mut(row, col) = Cell {
                value: cell_data.value.unwrap_or(ScalarValue::Empty),
                borders: cell_data.borders,
            };
        }
        for merge in data.merged_cells {
            grid.add_merge(merge);
        }
        grid
    }
}

/// What a backend can actually do; callers probe this instead of guessing.
#[derive(Clone, Debug, Default)]
pub struct BackendCaps {
    pub read: bool,
    pub write: bool,
    pub streaming: bool,
    pub styles: bool,
    pub merged_cells: bool,
    pub formulas: bool,
    pub bytes_input: bool,
    pub random_access: bool,
}

#[derive(Clone, Copy, Debug)]
pub enum AccessGranularity {
    /// Random cell access.
    Cell,
    /// Range-based access.
    Range,
    /// Sheet-at-a-time (umya).
    Sheet,
    /// All-or-nothing.
    Workbook,
}

/// Where a save lands.
pub enum SaveDestination<'a> {
    /// Overwrite the file the workbook was opened from.
    InPlace,
    Path(&'a Path),
    Writer(&'a mut dyn Write),
    /// Serialize into a fresh `Vec<u8>` and return it.
    Bytes,
}

pub trait SpreadsheetReader: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn access_granularity(&self) -> AccessGranularity;
    fn capabilities(&self) -> BackendCaps;
    fn sheet_names(&self) -> Result<Vec<String>, Self::Error>;

    /// Constructor variants for different environments
    fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error>
    where
        Self: Sized;

    fn open_reader(reader: Box<dyn Read + Send + Sync>) -> Result<Self, Self::Error>
    where
        Self: Sized;

    fn open_bytes(data: Vec<u8>) -> Result<Self, Self::Error>
    where
        Self: Sized;

    fn read_sheet(&mut self, sheet: &str) -> Result<SheetData, Self::Error>;

    fn sheet_bounds(&self, sheet: &str) -> Option<(u32, u32)>;
}

pub trait SpreadsheetWriter: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn write_cell(
        &mut self,
        sheet: &str,
        row: u32,
        col: u32,
        data: CellData,
    ) -> Result<(), Self::Error>;

    fn write_range(
        &mut self,
        sheet: &str,
        cells: BTreeMap<(u32, u32), CellData>,
    ) -> Result<(), Self::Error> {
        for ((row, col), data) in cells {
            self.write_cell(sheet, row, col, data)?;
        }
        Ok(())
    }

    fn clear_range(
        &mut self,
        sheet: &str,
        start: (u32, u32),
        end: (u32, u32),
    ) -> Result<(), Self::Error>;

    fn create_sheet(&mut self, name: &str) -> Result<(), Self::Error>;
    fn delete_sheet(&mut self, name: &str) -> Result<(), Self::Error>;

    fn flush(&mut self) -> Result<(), Self::Error>;

    fn save_to(&mut self, dest: SaveDestination<'_>) -> Result<Option<Vec<u8>>, Self::Error>;

    /// In-place save shorthand.
    fn save(&mut self) -> Result<(), Self::Error> {
        self.save_to(SaveDestination::InPlace).map(|_| ())
    }
}

pub trait SpreadsheetIO: SpreadsheetReader + SpreadsheetWriter {}

impl<T: SpreadsheetReader + SpreadsheetWriter> SpreadsheetIO for T {}
