#![cfg(feature = "umya")]

use crate::a1::parse_a1_range;
use crate::error::IoError;
use crate::traits::{
    AccessGranularity, BackendCaps, CellData, SaveDestination, SheetData, SpreadsheetReader,
    SpreadsheetWriter,
};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use tablecarve_core::{Borders, ScalarValue, serial_to_datetime};
use umya_spreadsheet::{Border, CellRawValue, CellValue, Spreadsheet, Style, reader::xlsx};

/// xlsx backend over `umya-spreadsheet`: reads computed cell values,
/// per-edge border styles and merge ranges; writes typed values and full
/// workbooks.
pub struct UmyaAdapter {
    workbook: RwLock<Spreadsheet>,
    original_path: Option<PathBuf>,
}

impl UmyaAdapter {
    /// A workbook with no sheets at all, for building output files from
    /// scratch (every sheet is created explicitly).
    pub fn new_empty() -> Self {
        Self {
            workbook: RwLock::new(umya_spreadsheet::new_file_empty_worksheet()),
            original_path: None,
        }
    }

    fn convert_cell_value(cv: &CellValue, date_format: bool) -> Option<ScalarValue> {
        let raw = cv.get_raw_value();
        if raw.is_empty() {
            return None;
        }
        if raw.is_error() {
            // Error cells survive as their display text; detection only
            // cares about emptiness.
            return Some(ScalarValue::Text(cv.get_value().to_string()));
        }
        match raw {
            CellRawValue::Numeric(n) => {
                if date_format {
                    Some(ScalarValue::DateTime(serial_to_datetime(*n)))
                } else {
                    Some(ScalarValue::Number(*n))
                }
            }
            CellRawValue::Bool(b) => Some(ScalarValue::Boolean(*b)),
            CellRawValue::String(s) => Some(ScalarValue::Text(s.to_string())),
            CellRawValue::RichText(rt) => Some(ScalarValue::Text(rt.get_text().to_string())),
            CellRawValue::Lazy(s) => {
                // attempt parse
                let txt = s.as_ref();
                if let Ok(n) = txt.parse::<f64>() {
                    Some(ScalarValue::Number(n))
                } else if txt.eq_ignore_ascii_case("TRUE") {
                    Some(ScalarValue::Boolean(true))
                } else if txt.eq_ignore_ascii_case("FALSE") {
                    Some(ScalarValue::Boolean(false))
                } else {
                    Some(ScalarValue::Text(txt.to_string()))
                }
            }
            CellRawValue::Error(_) => unreachable!(),
            CellRawValue::Empty => None,
        }
    }

    fn convert_borders(style: &Style) -> Borders {
        match style.get_borders() {
            Some(b) => Borders {
                left: b.get_left().get_border_style() != Border::BORDER_NONE,
                right: b.get_right().get_border_style() != Border::BORDER_NONE,
                top: b.get_top().get_border_style() != Border::BORDER_NONE,
                bottom: b.get_bottom().get_border_style() != Border::BORDER_NONE,
            },
            None => Borders::NONE,
        }
    }
}

/// Does a number-format code render its numeric value as a date or time?
/// Bracketed sections, quoted literals and escaped characters carry no
/// format semantics and are skipped.
fn is_date_format(code: &str) -> bool {
    let mut in_quotes = false;
    let mut in_brackets = false;
    let mut chars = code.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '[' if !in_quotes => in_brackets = true,
            ']' if !in_quotes => in_brackets = false,
            '\\' if !in_quotes => {
                chars.next();
            }
            _ if in_quotes || in_brackets => {}
            'y' | 'm' | 'd' | 'h' | 's' | 'Y' | 'M' | 'D' | 'H' | 'S' => return true,
            _ => {}
        }
    }
    false
}

impl SpreadsheetReader for UmyaAdapter {
    type Error = IoError;

    fn access_granularity(&self) -> AccessGranularity {
        AccessGranularity::Sheet
    }

    fn capabilities(&self) -> BackendCaps {
        BackendCaps {
            read: true,
            write: true,
            styles: true,
            merged_cells: true,
            bytes_input: true,
            ..Default::default()
        }
    }

    fn sheet_names(&self) -> Result<Vec<String>, Self::Error> {
        let wb = self.workbook.read();
        let count = wb.get_sheet_count();
        let mut names = Vec::with_capacity(count);
        for i in 0..count {
            if let Some(s) = wb.get_sheet(&i) {
                names.push(s.get_name().to_string());
            }
        }
        Ok(names)
    }

    fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        // Full (non-lazy) read so later writes and saves never trip over
        // half-deserialized sheets.
        let book = xlsx::read(path.as_ref()).map_err(|e| IoError::from_backend("umya", e))?;
        Ok(Self {
            workbook: RwLock::new(book),
            original_path: Some(path.as_ref().to_path_buf()),
        })
    }

    fn open_reader(mut reader: Box<dyn Read + Send + Sync>) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Self::open_bytes(buf)
    }

    fn open_bytes(data: Vec<u8>) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        let book = xlsx::read_reader(Cursor::new(data), true)
            .map_err(|e| IoError::from_backend("umya", e))?;
        Ok(Self {
            workbook: RwLock::new(book),
            original_path: None,
        })
    }

    fn read_sheet(&mut self, sheet: &str) -> Result<SheetData, Self::Error> {
        let _span = tracing::info_span!("io_read_sheet", backend = "umya", sheet).entered();
        let wb = self.workbook.read();
        let ws = wb
            .get_sheet_by_name(sheet)
            .ok_or_else(|| IoError::SheetNotFound(sheet.to_string()))?;

        let mut cells: BTreeMap<(u32, u32), CellData> = BTreeMap::new();
        for cell in ws.get_cell_collection() {
            let coord = cell.get_coordinate();
            let col = *coord.get_col_num();
            let row = *coord.get_row_num();

            let style = cell.get_style();
            let borders = Self::convert_borders(style);
            let date_format = style
                .get_number_format()
                .map(|nf| is_date_format(nf.get_format_code()))
                .unwrap_or(false);
            let value = Self::convert_cell_value(cell.get_cell_value(), date_format);
            // Border-only cells stay: they are exactly what the detector
            // feeds on. Cells with neither content nor styling are noise.
            if value.is_none() && !borders.any() {
                continue;
            }
            cells.insert((row, col), CellData { value, borders });
        }

        let mut merged_cells = Vec::new();
        for range in ws.get_merge_cells() {
            merged_cells.push(parse_a1_range(&range.get_range())?);
        }

        let mut dims = cells.keys().fold((0u32, 0u32), |mut acc, (r, c)| {
            if *r > acc.0 {
                acc.0 = *r;
            }
            if *c > acc.1 {
                acc.1 = *c;
            }
            acc
        });
        for m in &merged_cells {
            dims.0 = dims.0.max(m.end_row);
            dims.1 = dims.1.max(m.end_col);
        }
        let dimensions = if dims.0 == 0 || dims.1 == 0 {
            None
        } else {
            Some(dims)
        };

        tracing::debug!(
            cells = cells.len(),
            merges = merged_cells.len(),
            "sheet read"
        );
        Ok(SheetData {
            cells,
            dimensions,
            merged_cells,
        })
    }

    fn sheet_bounds(&self, sheet: &str) -> Option<(u32, u32)> {
        let wb = self.workbook.read();
        let ws = wb.get_sheet_by_name(sheet)?;
        let mut max_r = 0;
        let mut max_c = 0;
        for cell in ws.get_cell_collection() {
            let coord = cell.get_coordinate();
            let r = *coord.get_row_num();
            let c = *coord.get_col_num();
            if r > max_r {
                max_r = r;
            }
            if c > max_c {
                max_c = c;
            }
        }
        if max_r == 0 || max_c == 0 {
            None
        } else {
            Some((max_r, max_c))
        }
    }
}

impl SpreadsheetWriter for UmyaAdapter {
    type Error = IoError;

    fn write_cell(
        &mut self,
        sheet: &str,
        row: u32,
        col: u32,
        data: CellData,
    ) -> Result<(), Self::Error> {
        let mut wb = self.workbook.write();
        if wb.get_sheet_by_name(sheet).is_none() {
            wb.new_sheet(sheet)
                .map_err(|e| IoError::from_backend("umya", e))?;
        }
        let ws = wb
            .get_sheet_by_name_mut(sheet)
            .ok_or_else(|| IoError::SheetNotFound(sheet.to_string()))?;

        // umya uses (col, row)
        let cell = ws.get_cell_mut((col, row));
        match data.value {
            Some(ScalarValue::Number(n)) => {
                cell.set_value_number(n);
            }
            Some(ScalarValue::Int(i)) => {
                cell.set_value_number(i as f64);
            }
            Some(ScalarValue::Boolean(b)) => {
                cell.set_value_bool(b);
            }
            Some(ScalarValue::Text(s)) => {
                cell.set_value(s);
            }
            Some(ScalarValue::DateTime(dt)) => {
                cell.set_value(dt.to_string());
            }
            Some(ScalarValue::Empty) | None => {
                cell.set_blank();
            }
        }

        if data.borders.any() {
            let borders = cell.get_style_mut().get_borders_mut();
            if data.borders.left {
                borders.get_left_mut().set_border_style(Border::BORDER_THIN);
            }
            if data.borders.right {
                borders.get_right_mut().set_border_style(Border::BORDER_THIN);
            }
            if data.borders.top {
                borders.get_top_mut().set_border_style(Border::BORDER_THIN);
            }
            if data.borders.bottom {
                borders.get_bottom_mut().set_border_style(Border::BORDER_THIN);
            }
        }
        Ok(())
    }

    fn clear_range(
        &mut self,
        sheet: &str,
        start: (u32, u32),
        end: (u32, u32),
    ) -> Result<(), Self::Error> {
        let mut wb = self.workbook.write();
        let ws = match wb.get_sheet_by_name_mut(sheet) {
            Some(s) => s,
            None => return Ok(()), // nothing to clear
        };
        for r in start.0..=end.0 {
            for c in start.1..=end.1 {
                ws.get_cell_mut((c, r)).set_blank();
            }
        }
        Ok(())
    }

    fn create_sheet(&mut self, name: &str) -> Result<(), Self::Error> {
        let mut wb = self.workbook.write();
        if wb.get_sheet_by_name(name).is_none() {
            wb.new_sheet(name)
                .map_err(|e| IoError::from_backend("umya", e))?;
        }
        Ok(())
    }

    fn delete_sheet(&mut self, name: &str) -> Result<(), Self::Error> {
        let mut wb = self.workbook.write();
        let _ = wb.remove_sheet_by_name(name); // ignore error if sheet not present
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        // No-op: writes are already in-memory. Keep for interface parity.
        Ok(())
    }

    fn save_to(&mut self, dest: SaveDestination<'_>) -> Result<Option<Vec<u8>>, Self::Error> {
        match dest {
            SaveDestination::InPlace => {
                let path = self.original_path.as_ref().ok_or_else(|| IoError::Backend {
                    backend: "umya".to_string(),
                    message: "in-place save unavailable: no original path".to_string(),
                })?;
                let wb = self.workbook.read();
                umya_spreadsheet::writer::xlsx::write(&*wb, path)
                    .map_err(|e| IoError::from_backend("umya", e))?;
                Ok(None)
            }
            SaveDestination::Path(path) => {
                let wb = self.workbook.read();
                umya_spreadsheet::writer::xlsx::write(&*wb, path)
                    .map_err(|e| IoError::from_backend("umya", e))?;
                Ok(None)
            }
            SaveDestination::Writer(w) => {
                let wb = self.workbook.read();
                let mut buf: Vec<u8> = Vec::new();
                umya_spreadsheet::writer::xlsx::write_writer(&*wb, &mut buf)
                    .map_err(|e| IoError::from_backend("umya", e))?;
                w.write_all(&buf)?;
                Ok(None)
            }
            SaveDestination::Bytes => {
                let wb = self.workbook.read();
                let mut buf: Vec<u8> = Vec::new();
                umya_spreadsheet::writer::xlsx::write_writer(&*wb, &mut buf)
                    .map_err(|e| IoError::from_backend("umya", e))?;
                Ok(Some(buf))
            }
        }
    }
}
