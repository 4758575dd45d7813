use crate::common::build_workbook;
use tablecarve_io::{
    Borders, CellData, SaveDestination, ScalarValue, SpreadsheetReader, SpreadsheetWriter,
    UmyaAdapter,
};

#[test]
fn empty_workbook_gains_only_created_sheets() {
    let mut writer = UmyaAdapter::new_empty();
    writer.create_sheet("Data").unwrap();
    writer
        .write_cell("Data", 1, 1, CellData::from_value(123.0))
        .unwrap();

    let bytes = writer.save_to(SaveDestination::Bytes).unwrap().unwrap();
    assert!(bytes.len() > 100, "expected non-trivial xlsx byte output");

    let mut reopened = UmyaAdapter::open_bytes(bytes).unwrap();
    assert_eq!(reopened.sheet_names().unwrap(), vec!["Data".to_string()]);
    let sheet = reopened.read_sheet("Data").unwrap();
    assert_eq!(
        sheet.cells.get(&(1, 1)).and_then(|c| c.value.clone()),
        Some(ScalarValue::Number(123.0))
    );
}

#[test]
fn write_cell_creates_missing_sheets_on_demand() {
    let mut writer = UmyaAdapter::new_empty();
    writer
        .write_cell("Lazy", 2, 3, CellData::from_value("x"))
        .unwrap();

    let bytes = writer.save_to(SaveDestination::Bytes).unwrap().unwrap();
    let mut reopened = UmyaAdapter::open_bytes(bytes).unwrap();
    let sheet = reopened.read_sheet("Lazy").unwrap();
    assert_eq!(
        sheet.cells.get(&(2, 3)).and_then(|c| c.value.clone()),
        Some(ScalarValue::Text("x".to_string()))
    );
}

#[test]
fn save_to_path_and_in_place() {
    let (_tmp, path) = build_workbook(|book| {
        let sh = book.get_sheet_by_name_mut("Sheet1").unwrap();
        sh.get_cell_mut((1, 1)).set_value_number(1);
    });

    let mut adapter = UmyaAdapter::open_path(&path).unwrap();
    adapter
        .write_cell("Sheet1", 2, 1, CellData::from_value(456.0))
        .unwrap();
    // In place save
    adapter.save().unwrap();

    let mut reopened = UmyaAdapter::open_path(&path).unwrap();
    let sheet = reopened.read_sheet("Sheet1").unwrap();
    assert_eq!(
        sheet.cells.get(&(2, 1)).and_then(|c| c.value.clone()),
        Some(ScalarValue::Number(456.0))
    );

    // Save to a second path leaves the original untouched.
    let copy = path.with_file_name("copy.xlsx");
    reopened
        .write_cell("Sheet1", 3, 1, CellData::from_value("only in copy"))
        .unwrap();
    reopened.save_to(SaveDestination::Path(&copy)).unwrap();

    let mut original = UmyaAdapter::open_path(&path).unwrap();
    assert!(
        !original
            .read_sheet("Sheet1")
            .unwrap()
            .cells
            .contains_key(&(3, 1))
    );
    let mut copied = UmyaAdapter::open_path(&copy).unwrap();
    assert!(copied.read_sheet("Sheet1").unwrap().cells.contains_key(&(3, 1)));
}

#[test]
fn in_place_save_requires_an_original_path() {
    let mut writer = UmyaAdapter::new_empty();
    writer.create_sheet("Data").unwrap();

    let err = writer.save().expect_err("no original path to save onto");
    assert!(err.to_string().contains("no original path"), "{err}");
}

#[test]
fn save_to_writer_streams_the_workbook() {
    let mut writer = UmyaAdapter::new_empty();
    writer.create_sheet("Data").unwrap();
    writer
        .write_cell("Data", 1, 1, CellData::from_value(7.0))
        .unwrap();

    let mut buf: Vec<u8> = Vec::new();
    writer.save_to(SaveDestination::Writer(&mut buf)).unwrap();
    assert!(buf.len() > 100);

    let mut reopened = UmyaAdapter::open_bytes(buf).unwrap();
    assert!(reopened.read_sheet("Data").unwrap().cells.contains_key(&(1, 1)));
}

#[test]
fn written_borders_round_trip() {
    let mut writer = UmyaAdapter::new_empty();
    writer.create_sheet("Data").unwrap();
    writer
        .write_cell(
            "Data",
            1,
            1,
            CellData {
                value: Some(ScalarValue::Text("boxed".to_string())),
                borders: Borders::BOX,
            },
        )
        .unwrap();

    let bytes = writer.save_to(SaveDestination::Bytes).unwrap().unwrap();
    let mut reopened = UmyaAdapter::open_bytes(bytes).unwrap();
    let sheet = reopened.read_sheet("Data").unwrap();
    assert_eq!(sheet.cells.get(&(1, 1)).unwrap().borders, Borders::BOX);
}

#[test]
fn delete_sheet_and_clear_range() {
    let mut writer = UmyaAdapter::new_empty();
    writer.create_sheet("Keep").unwrap();
    writer.create_sheet("Drop").unwrap();
    writer
        .write_cell("Keep", 1, 1, CellData::from_value("a"))
        .unwrap();
    writer
        .write_cell("Keep", 1, 2, CellData::from_value("b"))
        .unwrap();
    writer.delete_sheet("Drop").unwrap();
    writer.clear_range("Keep", (1, 2), (1, 2)).unwrap();
    writer.flush().unwrap();

    let bytes = writer.save_to(SaveDestination::Bytes).unwrap().unwrap();
    let mut reopened = UmyaAdapter::open_bytes(bytes).unwrap();
    assert_eq!(reopened.sheet_names().unwrap(), vec!["Keep".to_string()]);
    let sheet = reopened.read_sheet("Keep").unwrap();
    assert_eq!(
        sheet.cells.get(&(1, 1)).and_then(|c| c.value.clone()),
        Some(ScalarValue::Text("a".to_string()))
    );
    assert!(
        sheet
            .cells
            .get(&(1, 2))
            .and_then(|c| c.value.clone())
            .is_none()
    );
}
