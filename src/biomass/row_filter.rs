use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::{Dataset, Row};

/// 행 선택 기준.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterCriterion {
    /// 대소문자 무시, 앞뒤 공백 무시 이름 일치
    Name(String),
    /// 앞뒤 공백을 뺀 문자열 일치
    Id(String),
}

/// 이름이 같은 행을 모두 고른다. 이름이 비었거나 데이터셋이 없으면 빈 결과.
pub fn filter_by_name(dataset: Option<&Dataset>, name: &str) -> Vec<Row> {
    let wanted = name.trim().to_lowercase();
    let Some(dataset) = dataset else {
        return Vec::new();
    };
    if wanted.is_empty() {
        return Vec::new();
    }
    let rows: Vec<Row> = dataset
        .rows
        .iter()
        .filter(|row| {
            row.biomass_name
                .as_deref()
                .is_some_and(|n| n.trim().to_lowercase() == wanted)
        })
        .cloned()
        .collect();
    debug!(name = %wanted, matched = rows.len(), "filtered by name");
    rows
}

/// 식별자가 같은 행을 모두 고른다. 식별자가 비었거나 데이터셋이 없으면 빈 결과.
pub fn filter_by_id(dataset: Option<&Dataset>, id: &str) -> Vec<Row> {
    let wanted = id.trim();
    let Some(dataset) = dataset else {
        return Vec::new();
    };
    if wanted.is_empty() {
        return Vec::new();
    }
    let rows: Vec<Row> = dataset
        .rows
        .iter()
        .filter(|row| row.biomass_id.as_deref().is_some_and(|i| i.trim() == wanted))
        .cloned()
        .collect();
    debug!(id = %wanted, matched = rows.len(), "filtered by id");
    rows
}

/// 기준에 따라 필터를 적용한다.
pub fn apply_filter(dataset: Option<&Dataset>, criterion: &FilterCriterion) -> Vec<Row> {
    match criterion {
        FilterCriterion::Name(name) => filter_by_name(dataset, name),
        FilterCriterion::Id(id) => filter_by_id(dataset, id),
    }
}
