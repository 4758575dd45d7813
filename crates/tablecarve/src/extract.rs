//! Workbook-level extraction driver: feeds each input sheet through the
//! core pipeline and writes every detected table to its own output sheet.

use tablecarve_core::{SheetGrid, TableError, extract_tables};
use tablecarve_io::{CellData, IoError, SpreadsheetReader, SpreadsheetWriter};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Counters aggregated across one `run`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractStats {
    pub sheets_scanned: usize,
    pub tables_found: usize,
    pub cells_written: usize,
}

/// Drives extraction from one reader into one writer. Processing is
/// all-or-nothing: the first error aborts the whole run.
#[derive(Debug, Default)]
pub struct Extractor {
    stats: ExtractStats,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &ExtractStats {
        &self.stats
    }

    /// For every sheet of `reader`, in workbook order: build the grid, run
    /// the core pipeline, and write table *i* (1-indexed) to an output
    /// sheet named `<sheetName>_Table_<i>`. Sheets without tables produce
    /// no output sheets. Empty values are skipped rather than written.
    pub fn run<R, W>(&mut self, reader: &mut R, writer: &mut W) -> Result<ExtractStats, ExtractError>
    where
        R: SpreadsheetReader,
        W: SpreadsheetWriter,
    {
        let sheet_names = reader
            .sheet_names()
            .map_err(|e| IoError::from_backend("backend", e))?;

        for sheet_name in sheet_names {
            let _span = tracing::info_span!("extract_sheet", sheet = sheet_name.as_str()).entered();

            let data = reader
                .read_sheet(&sheet_name)
                .map_err(|e| IoError::from_backend("backend", e))?;
            let mut grid = SheetGrid::from(data);
            let tables = extract_tables(&mut grid);
            if tables.is_empty() {
                tracing::debug!("no bordered tables detected");
            }

            for (idx, table) in tables.iter().enumerate() {
                table.validate()?;
                let name = format!("{sheet_name}_Table_{}", idx + 1);
                writer
                    .create_sheet(&name)
                    .map_err(|e| IoError::from_backend("backend", e))?;

                for (r, row_values) in table.iter_all_rows().enumerate() {
                    for (c, value) in row_values.iter().enumerate() {
                        if value.is_empty() {
                            continue;
                        }
                        writer
                            .write_cell(
                                &name,
                                r as u32 + 1,
                                c as u32 + 1,
                                CellData::from_value(value.clone()),
                            )
                            .map_err(|e| IoError::from_backend("backend", e))?;
                        self.stats.cells_written += 1;
                    }
                }
                self.stats.tables_found += 1;
                tracing::info!(
                    table = name.as_str(),
                    rows = table.row_count() + 1,
                    cols = table.width(),
                    "table written"
                );
            }
            self.stats.sheets_scanned += 1;
        }

        Ok(self.stats.clone())
    }
}
