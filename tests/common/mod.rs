#![allow(dead_code)]

use biomass_calculator::config::ColumnNames;
use biomass_calculator::dataset::{CellValue, Dataset};

pub fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

pub fn record(name: &str, id: f64, property: &str, value: CellValue) -> Vec<(String, CellValue)> {
    vec![
        ("biomass_name".to_string(), CellValue::from(name)),
        ("biomass_id".to_string(), CellValue::Number(id)),
        ("property".to_string(), CellValue::from(property)),
        ("ar_value".to_string(), value),
    ]
}

/// Pine(101)은 C/H/O와 LHV가 모두 있고, Oak(102)는 산소가 없다.
pub fn sample_dataset() -> Dataset {
    let records = vec![
        record("Pine", 101.0, "Carbon", 50.0.into()),
        record("Pine", 101.0, "Hydrogen", 6.0.into()),
        record("Pine", 101.0, "Oxygen", "44".into()),
        record("Pine", 101.0, "Net calorific value (LHV)", 18.5.into()),
        record("Pine", 101.0, "Ash", 1.2.into()),
        record("OAK ", 102.0, "Carbon", 49.0.into()),
        record("OAK ", 102.0, "Hydrogen", 6.1.into()),
        record("OAK ", 102.0, "Net calorific value (LHV)", 17.9.into()),
    ];
    let headers = ["biomass_name", "biomass_id", "property", "ar_value"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    Dataset::from_records(headers, records, &ColumnNames::default())
}
