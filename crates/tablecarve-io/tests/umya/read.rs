use crate::common::{box_border, build_workbook};
use tablecarve_io::{
    Borders, CellData, MergeRange, ScalarValue, SpreadsheetReader, UmyaAdapter,
};

#[test]
fn reads_values_borders_and_merges() {
    let (_tmp, path) = build_workbook(|book| {
        let sh = book.get_sheet_by_name_mut("Sheet1").unwrap();
        sh.get_cell_mut((1, 1)).set_value("Name"); // A1
        sh.get_cell_mut((2, 1)).set_value_number(42); // B1
        sh.get_cell_mut((1, 2)).set_value_bool(true); // A2
        sh.add_merge_cells("A10:B11");
        box_border(book, 1, 1);
        box_border(book, 2, 1);
        // D4 carries styling but no value; it must survive the read.
        box_border(book, 4, 4);
    });

    let mut adapter = UmyaAdapter::open_path(&path).unwrap();
    let sheet = adapter.read_sheet("Sheet1").unwrap();

    assert_eq!(
        sheet.cells.get(&(1, 1)),
        Some(&CellData {
            value: Some(ScalarValue::Text("Name".to_string())),
            borders: Borders::BOX,
        })
    );
    assert_eq!(
        sheet.cells.get(&(1, 2)).and_then(|c| c.value.clone()),
        Some(ScalarValue::Number(42.0))
    );
    assert_eq!(
        sheet.cells.get(&(2, 1)).and_then(|c| c.value.clone()),
        Some(ScalarValue::Boolean(true))
    );

    let border_only = sheet.cells.get(&(4, 4)).expect("styled cell kept");
    assert!(border_only.value.is_none());
    assert_eq!(border_only.borders, Borders::BOX);

    assert_eq!(
        sheet.merged_cells,
        vec![MergeRange::new(10, 1, 11, 2).unwrap()]
    );
    // Dimensions cover the merge even though its cells hold nothing.
    assert_eq!(sheet.dimensions, Some((11, 4)));
}

#[test]
fn date_formatted_numeric_becomes_datetime() {
    let (_tmp, path) = build_workbook(|book| {
        let sh = book.get_sheet_by_name_mut("Sheet1").unwrap();
        // Serial 45292 = 2024-01-01 in the 1900 date system.
        let cell = sh.get_cell_mut((1, 1));
        cell.set_value_number(45292);
        cell.get_style_mut()
            .get_number_format_mut()
            .set_format_code("yyyy-mm-dd");
        sh.get_cell_mut((2, 1)).set_value_number(45292); // no format: stays numeric
    });

    let mut adapter = UmyaAdapter::open_path(&path).unwrap();
    let sheet = adapter.read_sheet("Sheet1").unwrap();

    match sheet.cells.get(&(1, 1)).and_then(|c| c.value.clone()) {
        Some(ScalarValue::DateTime(dt)) => {
            assert_eq!(dt.date().to_string(), "2024-01-01");
        }
        other => panic!("expected a DateTime, got {other:?}"),
    }
    assert_eq!(
        sheet.cells.get(&(1, 2)).and_then(|c| c.value.clone()),
        Some(ScalarValue::Number(45292.0))
    );
}

#[test]
fn missing_sheet_is_an_error() {
    let (_tmp, path) = build_workbook(|_| {});
    let mut adapter = UmyaAdapter::open_path(&path).unwrap();

    assert_eq!(adapter.sheet_names().unwrap(), vec!["Sheet1".to_string()]);
    let err = adapter.read_sheet("Nope").unwrap_err();
    assert!(err.to_string().contains("sheet not found"), "{err}");
}

#[test]
fn open_bytes_reads_the_same_content() {
    let (_tmp, path) = build_workbook(|book| {
        let sh = book.get_sheet_by_name_mut("Sheet1").unwrap();
        sh.get_cell_mut((1, 1)).set_value_number(10);
    });
    let bytes = std::fs::read(&path).unwrap();

    let mut adapter = UmyaAdapter::open_bytes(bytes).unwrap();
    let sheet = adapter.read_sheet("Sheet1").unwrap();
    assert_eq!(
        sheet.cells.get(&(1, 1)).and_then(|c| c.value.clone()),
        Some(ScalarValue::Number(10.0))
    );
}

#[test]
fn open_bytes_rejects_garbage() {
    assert!(UmyaAdapter::open_bytes(vec![0x01, 0x02, 0x03, 0x04]).is_err());
}

#[test]
fn sheet_bounds_track_last_cell() {
    let (_tmp, path) = build_workbook(|book| {
        let sh = book.get_sheet_by_name_mut("Sheet1").unwrap();
        sh.get_cell_mut((3, 7)).set_value("x"); // C7
    });
    let adapter = UmyaAdapter::open_path(&path).unwrap();
    assert_eq!(adapter.sheet_bounds("Sheet1"), Some((7, 3)));
    assert_eq!(adapter.sheet_bounds("Nope"), None);
}
