//! 워크북의 첫 시트를 [`Dataset`]으로 읽는다.
//!
//! 첫 행은 열 머리로 쓰고, 이후 각 행은 비어 있지 않은 셀만 담은 레코드가 된다.
//! 완전히 빈 행은 건너뛴다.

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ColumnNames;
use crate::dataset::{CellValue, Dataset};

/// 워크북 읽기 오류.
#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("워크북을 열 수 없음: {0}")]
    Open(#[from] calamine::Error),
    #[error("워크북에 시트가 없음")]
    NoSheets,
}

/// 경로의 워크북(xlsx/xlsm/xls/ods)에서 첫 시트를 읽는다.
pub fn read_first_sheet(path: &Path, columns: &ColumnNames) -> Result<Dataset, WorkbookError> {
    let workbook = open_workbook_auto(path)?;
    let dataset = first_sheet(workbook, columns)?;
    info!(path = %path.display(), rows = dataset.len(), "workbook loaded");
    Ok(dataset)
}

/// 메모리에 올라온 워크북 바이트에서 첫 시트를 읽는다.
pub fn read_first_sheet_from_bytes(
    bytes: Vec<u8>,
    columns: &ColumnNames,
) -> Result<Dataset, WorkbookError> {
    let workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let dataset = first_sheet(workbook, columns)?;
    info!(rows = dataset.len(), "workbook loaded from memory");
    Ok(dataset)
}

fn first_sheet<RS: Read + Seek>(
    mut workbook: Sheets<RS>,
    columns: &ColumnNames,
) -> Result<Dataset, WorkbookError> {
    let range = workbook.worksheet_range_at(0).ok_or(WorkbookError::NoSheets)??;
    Ok(range_to_dataset(&range, columns))
}

/// calamine 셀 범위를 데이터셋으로 바꾼다.
pub fn range_to_dataset(range: &Range<Data>, columns: &ColumnNames) -> Dataset {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Dataset::default();
    };
    let headers = header_names(header_row);
    debug!(?headers, "sheet headers");

    let records = rows
        .filter_map(|row| {
            let record: Vec<(String, CellValue)> = row
                .iter()
                .zip(&headers)
                .map(|(cell, header)| (header.clone(), to_cell_value(cell)))
                .filter(|(_, value)| !value.is_empty())
                .collect();
            (!record.is_empty()).then_some(record)
        })
        .collect();

    Dataset::from_records(headers, records, columns)
}

/// 빈 머리는 `__EMPTY`, `__EMPTY_1`..., 중복 머리는 `name_1`, `name_2`...로 바꾼다.
fn header_names(row: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    row.iter()
        .map(|cell| {
            let base = match to_cell_value(cell) {
                CellValue::Empty => "__EMPTY".to_string(),
                other => other.to_string(),
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{base}_{count}")
            };
            *count += 1;
            name
        })
        .collect()
}

fn to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        // 엑셀 날짜는 1899-12-30 기준 일수로 둔다
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("#ERROR: {e:?}")),
    }
}
