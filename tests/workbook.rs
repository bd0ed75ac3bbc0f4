//! 실제 xlsx 파일을 만들어 첫 시트 읽기를 확인한다.
use biomass_calculator::biomass::{run_pipeline, FilterCriterion};
use biomass_calculator::config::ColumnNames;
use biomass_calculator::dataset::CellValue;
use biomass_calculator::workbook::{read_first_sheet, read_first_sheet_from_bytes, WorkbookError};
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

const ROWS: [(&str, f64, &str, f64); 4] = [
    ("Pine", 101.0, "Carbon", 50.0),
    ("Pine", 101.0, "Hydrogen", 6.0),
    ("Pine", 101.0, "Oxygen", 44.0),
    ("Pine", 101.0, "Net calorific value (LHV)", 18.5),
];

fn build_workbook() -> Workbook {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in ["biomass_name", "biomass_id", "property", "ar_value", "unit"]
        .iter()
        .enumerate()
    {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    for (i, (name, id, property, value)) in ROWS.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, *name).unwrap();
        sheet.write_number(row, 1, *id).unwrap();
        sheet.write_string(row, 2, *property).unwrap();
        sheet.write_number(row, 3, *value).unwrap();
    }
    sheet.write_string(4, 4, "MJ/kg").unwrap();
    // 6행은 비워 두고 7행에 한 줄 더
    sheet.write_string(6, 0, "Straw").unwrap();
    sheet.write_string(6, 2, "Carbon").unwrap();

    let other = workbook.add_worksheet();
    other.set_name("Other").unwrap();
    other.write_string(0, 0, "ignored").unwrap();
    workbook
}

#[test]
fn first_sheet_is_read_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("biomass.xlsx");
    build_workbook().save(&path).unwrap();

    let ds = read_first_sheet(&path, &ColumnNames::default()).unwrap();
    assert_eq!(ds.headers, vec!["biomass_name", "biomass_id", "property", "ar_value", "unit"]);
    assert_eq!(ds.len(), 5);
    assert_eq!(ds.rows[0].biomass_id.as_deref(), Some("101"));
    assert_eq!(ds.rows[0].ar_value, Some(CellValue::Number(50.0)));
    assert_eq!(ds.rows[3].get("unit"), Some(&CellValue::Text("MJ/kg".into())));
    assert!(ds.rows[0].get("unit").is_none());
    assert_eq!(ds.rows[4].biomass_name.as_deref(), Some("Straw"));
    assert_eq!(ds.issues.len(), 1);
    // 시트 7행이지만 빈 6행을 건너뛰므로 rows 안에서는 4번째
    assert_eq!(ds.issues[0].row_index, 4);
    let flagged = &ds.rows[ds.issues[0].row_index];
    assert_eq!(flagged.biomass_name.as_deref(), Some("Straw"));
}

#[test]
fn bytes_and_file_give_same_dataset() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("biomass.xlsx");
    build_workbook().save(&path).unwrap();
    let bytes = build_workbook().save_to_buffer().unwrap();

    let from_file = read_first_sheet(&path, &ColumnNames::default()).unwrap();
    let from_bytes = read_first_sheet_from_bytes(bytes, &ColumnNames::default()).unwrap();
    assert_eq!(from_file, from_bytes);
}

#[test]
fn custom_column_names_are_honoured() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in ["Name", "Code", "Parameter", "Value"].iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    sheet.write_string(1, 0, "Miscanthus").unwrap();
    sheet.write_string(1, 1, "M-7").unwrap();
    sheet.write_string(1, 2, "Carbon").unwrap();
    sheet.write_number(1, 3, 47.1).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let columns = ColumnNames {
        biomass_name: "Name".into(),
        biomass_id: "Code".into(),
        property: "Parameter".into(),
        ar_value: "Value".into(),
    };
    let ds = read_first_sheet_from_bytes(bytes, &columns).unwrap();
    assert!(ds.issues.is_empty());
    assert_eq!(ds.rows[0].biomass_id.as_deref(), Some("M-7"));
    assert_eq!(ds.rows[0].ar_value_f64(), 47.1);
}

#[test]
fn workbook_feeds_full_pipeline() {
    let bytes = build_workbook().save_to_buffer().unwrap();
    let ds = read_first_sheet_from_bytes(bytes, &ColumnNames::default()).unwrap();
    let report = run_pipeline(Some(&ds), FilterCriterion::Id("101".into()), "10", "0.3");
    assert_eq!(report.lhv_mj_per_kg, Some(18.5));
    assert_eq!(report.formula.unwrap().as_str(), "C1.51H2.16O1.00");
    assert!(report.flows.is_some());
}

#[test]
fn unreadable_bytes_are_an_error() {
    let err = read_first_sheet_from_bytes(b"not a workbook".to_vec(), &ColumnNames::default());
    assert!(matches!(err, Err(WorkbookError::Open(_))));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let result = read_first_sheet(&dir.path().join("absent.xlsx"), &ColumnNames::default());
    assert!(result.is_err());
}
