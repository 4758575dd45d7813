use std::path::PathBuf;
use umya_spreadsheet::{Border, Spreadsheet};

/// Write a fixture workbook into a tempdir and hand back both, so the dir
/// outlives the test body.
pub fn build_workbook(build: impl FnOnce(&mut Spreadsheet)) -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("fixture.xlsx");
    let mut book = umya_spreadsheet::new_file();
    build(&mut book);
    umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();
    (tmp, path)
}

/// Stamp a thin box border on one cell of `Sheet1`. umya addresses cells as
/// (col, row).
pub fn box_border(book: &mut Spreadsheet, col: u32, row: u32) {
    let sh = book.get_sheet_by_name_mut("Sheet1").unwrap();
    let borders = sh.get_cell_mut((col, row)).get_style_mut().get_borders_mut();
    borders.get_left_mut().set_border_style(Border::BORDER_THIN);
    borders.get_right_mut().set_border_style(Border::BORDER_THIN);
    borders.get_top_mut().set_border_style(Border::BORDER_THIN);
    borders.get_bottom_mut().set_border_style(Border::BORDER_THIN);
}
