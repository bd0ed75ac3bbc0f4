//! 업로드된 시트의 행 모델.
//!
//! 외부 파서가 돌려준 (헤더, 값) 레코드를 한 번만 검증해 고정된 필드를 가진
//! [`Row`]로 만든다. 필수 필드가 빠진 행은 버리지 않고 [`RowIssue`]로 표시해
//! 계산 단계 깊숙한 곳에서 실패하지 않도록 한다.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::config::ColumnNames;
use crate::number;

/// 셀 하나의 값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// 숫자로 해석한다. 텍스트는 선행 숫자 부분만 읽고, 읽을 수 없으면 NaN이다.
    pub fn to_f64(&self) -> f64 {
        match self {
            CellValue::Number(v) => *v,
            CellValue::Text(s) => number::parse_float(s),
            CellValue::Bool(_) | CellValue::Empty => f64::NAN,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Number(v) => f.write_str(&number::format_number(*v)),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// 바이오매스 한 시료의 측정 항목 하나.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub biomass_name: Option<String>,
    pub biomass_id: Option<String>,
    pub property: Option<String>,
    pub ar_value: Option<CellValue>,
    /// 표 표시에 쓰는 원본 (헤더, 값) 목록. 시트의 열 순서를 따른다.
    pub cells: Vec<(String, CellValue)>,
}

impl Row {
    /// 레코드에서 행을 만든다. 빈 셀은 해당 필드를 `None`으로 둔다.
    pub fn from_record(record: Vec<(String, CellValue)>, columns: &ColumnNames) -> Self {
        let lookup = |name: &str| {
            record
                .iter()
                .find(|(key, value)| key == name && !value.is_empty())
                .map(|(_, value)| value.clone())
        };
        Self {
            biomass_name: lookup(&columns.biomass_name).map(|v| v.to_string()),
            biomass_id: lookup(&columns.biomass_id).map(|v| v.to_string()),
            property: lookup(&columns.property).map(|v| v.to_string()),
            ar_value: lookup(&columns.ar_value),
            cells: record,
        }
    }

    /// `ar_value`를 숫자로 읽는다. 값이 없으면 NaN.
    pub fn ar_value_f64(&self) -> f64 {
        self.ar_value.as_ref().map_or(f64::NAN, CellValue::to_f64)
    }

    /// 열 이름으로 원본 셀을 찾는다.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(key, _)| key == column).map(|(_, v)| v)
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.biomass_name.is_none() {
            missing.push("biomass_name");
        }
        if self.biomass_id.is_none() {
            missing.push("biomass_id");
        }
        if self.property.is_none() {
            missing.push("property");
        }
        if self.ar_value.is_none() {
            missing.push("ar_value");
        }
        missing
    }
}

/// 필수 필드가 빠진 행에 대한 기록.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowIssue {
    /// `Dataset::rows`에서의 위치. 빈 행은 건너뛰므로 시트 행 번호와 다를 수 있다.
    pub row_index: usize,
    pub missing: Vec<&'static str>,
}

/// 시트 하나에서 읽어 들인 행 전체. 업로드 후에는 읽기 전용이다.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    pub issues: Vec<RowIssue>,
}

impl Dataset {
    /// 외부 파서가 만든 레코드 목록으로 데이터셋을 구성한다.
    pub fn from_records(
        headers: Vec<String>,
        records: Vec<Vec<(String, CellValue)>>,
        columns: &ColumnNames,
    ) -> Self {
        let mut rows = Vec::with_capacity(records.len());
        let mut issues = Vec::new();
        for (row_index, record) in records.into_iter().enumerate() {
            let row = Row::from_record(record, columns);
            let missing = row.missing_fields();
            if !missing.is_empty() {
                warn!(row_index, ?missing, "row is missing required fields");
                issues.push(RowIssue { row_index, missing });
            }
            rows.push(row);
        }
        Self {
            headers,
            rows,
            issues,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 표의 열 머리. 첫 행이 가진 열을 순서대로 쓴다.
    pub fn display_columns(&self) -> Vec<String> {
        display_columns(&self.rows)
    }
}

/// 행 목록을 표로 그릴 때 쓸 열 이름.
pub fn display_columns(rows: &[Row]) -> Vec<String> {
    rows.first()
        .map(|row| row.cells.iter().map(|(key, _)| key.clone()).collect())
        .unwrap_or_default()
}
