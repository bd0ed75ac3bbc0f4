use serde::Serialize;

use crate::biomass::{
    apply_filter, build_combustion_equation, calculate_flows, derive_formula, extract_lhv,
    CombustionEquation, ElementRatios, EmpiricalFormula, FilterCriterion, FlowResult,
};
use crate::dataset::{Dataset, Row};

/// 한 바이오매스에 대해 네 단계를 모두 돌린 결과. 일괄 실행 모드에서 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiomassReport {
    pub criterion: FilterCriterion,
    pub rows: Vec<Row>,
    pub lhv_mj_per_kg: Option<f64>,
    pub ratios: Option<ElementRatios>,
    pub formula: Option<EmpiricalFormula>,
    pub equation: Option<CombustionEquation>,
    pub flows: Option<FlowResult>,
}

/// 필터부터 유량까지 순서대로 계산한다. 앞 단계가 비면 뒤 단계도 비어 있다.
pub fn run_pipeline(
    dataset: Option<&Dataset>,
    criterion: FilterCriterion,
    power: &str,
    efficiency: &str,
) -> BiomassReport {
    let rows = apply_filter(dataset, &criterion);
    let lhv_mj_per_kg = extract_lhv(&rows);
    let derived = derive_formula(&rows);
    let equation = derived
        .as_ref()
        .map(|(ratios, _)| build_combustion_equation(ratios));
    let flows = derived
        .as_ref()
        .and_then(|(ratios, _)| calculate_flows(power, efficiency, lhv_mj_per_kg, ratios));
    let (ratios, formula) = derived.unzip();

    BiomassReport {
        criterion,
        rows,
        lhv_mj_per_kg,
        ratios,
        formula,
        equation,
        flows,
    }
}
