//! 행 필터와 발열량 추출 회귀 테스트.
mod common;

use biomass_calculator::biomass::{
    apply_filter, extract_lhv, filter_by_id, filter_by_name, FilterCriterion,
};
use biomass_calculator::dataset::{CellValue, Dataset, Row};
use common::{record, sample_dataset};

#[test]
fn name_match_ignores_case_and_surrounding_space() {
    let ds = sample_dataset();
    let rows = filter_by_name(Some(&ds), "  oak");
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.biomass_name.as_deref() == Some("OAK ")));

    let rows = filter_by_name(Some(&ds), "PINE");
    assert_eq!(rows.len(), 5);
}

#[test]
fn name_filter_is_exact_not_substring() {
    let ds = sample_dataset();
    assert!(filter_by_name(Some(&ds), "Pin").is_empty());
}

#[test]
fn id_match_compares_trimmed_strings() {
    let ds = sample_dataset();
    let rows = filter_by_id(Some(&ds), " 102 ");
    assert_eq!(rows.len(), 3);
    assert!(filter_by_id(Some(&ds), "102.5").is_empty());
    assert!(filter_by_id(Some(&ds), "10").is_empty());
}

#[test]
fn empty_input_or_missing_dataset_yields_nothing() {
    let ds = sample_dataset();
    assert!(filter_by_name(Some(&ds), "").is_empty());
    assert!(filter_by_name(Some(&ds), "   ").is_empty());
    assert!(filter_by_id(Some(&ds), "").is_empty());
    assert!(filter_by_name(None, "Pine").is_empty());
    assert!(filter_by_id(None, "101").is_empty());
    assert!(filter_by_name(Some(&Dataset::default()), "Pine").is_empty());
}

#[test]
fn rows_without_name_never_match() {
    let mut ds = sample_dataset();
    ds.rows.push(Row::from_record(
        vec![("property".to_string(), CellValue::from("Carbon"))],
        &Default::default(),
    ));
    assert_eq!(filter_by_name(Some(&ds), "pine").len(), 5);
}

#[test]
fn criterion_dispatches_to_matching_filter() {
    let ds = sample_dataset();
    let by_name = apply_filter(Some(&ds), &FilterCriterion::Name("pine".into()));
    let by_id = apply_filter(Some(&ds), &FilterCriterion::Id("101".into()));
    assert_eq!(by_name, by_id);
}

#[test]
fn lhv_is_first_matching_row() {
    let ds = sample_dataset();
    let pine = filter_by_name(Some(&ds), "pine");
    assert_eq!(extract_lhv(&pine), Some(18.5));

    let mut twice = pine.clone();
    twice.push(Row::from_record(
        record("Pine", 101.0, "Net calorific value (LHV)", 99.0.into()),
        &Default::default(),
    ));
    assert_eq!(extract_lhv(&twice), Some(18.5));
}

#[test]
fn lhv_absent_only_without_property_row() {
    assert_eq!(extract_lhv(&[]), None);

    let rows = vec![Row::from_record(
        record("X", 1.0, "Net calorific value (LHV)", "n/a".into()),
        &Default::default(),
    )];
    let lhv = extract_lhv(&rows);
    assert!(lhv.is_some_and(f64::is_nan));

    // 대소문자가 다르면 다른 항목이다
    let rows = vec![Row::from_record(
        record("X", 1.0, "net calorific value (lhv)", 10.0.into()),
        &Default::default(),
    )];
    assert_eq!(extract_lhv(&rows), None);
}

#[test]
fn lhv_text_value_is_parsed_leniently() {
    let rows = vec![Row::from_record(
        record("X", 1.0, "Net calorific value (LHV)", " 17.25 MJ/kg".into()),
        &Default::default(),
    )];
    assert_eq!(extract_lhv(&rows), Some(17.25));
}
