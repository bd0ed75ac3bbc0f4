//! 화면이 들고 있는 "단계별 현재 결과".
//!
//! 계산 단계는 모두 [`crate::biomass`]의 순수 함수이고, 여기서는 그 결과를 보관만 한다.
//! 단계가 `None`을 돌려주면 아무것도 바꾸지 않고 마지막 결과를 유지한다.

use tracing::debug;

use crate::biomass::{
    build_combustion_equation, calculate_flows, derive_formula, extract_lhv, filter_by_id,
    filter_by_name, CombustionEquation, ElementRatios, EmpiricalFormula, FlowResult,
};
use crate::dataset::{Dataset, Row};

/// 한 사용자 세션의 상태.
#[derive(Debug, Clone, Default)]
pub struct Session {
    dataset: Option<Dataset>,
    filtered: Vec<Row>,
    lhv_mj_per_kg: Option<f64>,
    ratios: Option<ElementRatios>,
    formula: Option<EmpiricalFormula>,
    equation: Option<CombustionEquation>,
    flows: Option<FlowResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 데이터셋으로 교체한다. 이미 계산된 결과는 다시 계산할 때까지 남는다.
    pub fn load_dataset(&mut self, dataset: Dataset) {
        debug!(rows = dataset.len(), "dataset replaced");
        self.dataset = Some(dataset);
    }

    /// 이름으로 필터한다. 입력이 비었거나 데이터셋이 없으면 아무것도 하지 않는다.
    pub fn filter_by_name(&mut self, name: &str) -> bool {
        if name.trim().is_empty() || self.dataset.is_none() {
            return false;
        }
        let rows = filter_by_name(self.dataset.as_ref(), name);
        self.set_filtered(rows);
        true
    }

    /// 식별자로 필터한다. 입력이 비었거나 데이터셋이 없으면 아무것도 하지 않는다.
    pub fn filter_by_id(&mut self, id: &str) -> bool {
        if id.trim().is_empty() || self.dataset.is_none() {
            return false;
        }
        let rows = filter_by_id(self.dataset.as_ref(), id);
        self.set_filtered(rows);
        true
    }

    fn set_filtered(&mut self, rows: Vec<Row>) {
        if let Some(lhv) = extract_lhv(&rows) {
            self.lhv_mj_per_kg = Some(lhv);
        }
        self.filtered = rows;
    }

    /// 필터된 행으로 실험식과 연소식을 계산한다. 계산되면 `true`.
    pub fn compute_formula(&mut self) -> bool {
        if self.filtered.is_empty() {
            return false;
        }
        let Some((ratios, formula)) = derive_formula(&self.filtered) else {
            return false;
        };
        self.equation = Some(build_combustion_equation(&ratios));
        self.ratios = Some(ratios);
        self.formula = Some(formula);
        true
    }

    /// 현재 몰비와 발열량으로 질량유량을 계산한다. 계산되면 `true`.
    pub fn compute_flows(&mut self, power: &str, efficiency: &str) -> bool {
        let Some(ratios) = self.ratios else {
            return false;
        };
        match calculate_flows(power, efficiency, self.lhv_mj_per_kg, &ratios) {
            Some(flows) => {
                self.flows = Some(flows);
                true
            }
            None => false,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn filtered(&self) -> &[Row] {
        &self.filtered
    }

    pub fn lhv_mj_per_kg(&self) -> Option<f64> {
        self.lhv_mj_per_kg
    }

    pub fn ratios(&self) -> Option<&ElementRatios> {
        self.ratios.as_ref()
    }

    pub fn formula(&self) -> Option<&EmpiricalFormula> {
        self.formula.as_ref()
    }

    pub fn equation(&self) -> Option<&CombustionEquation> {
        self.equation.as_ref()
    }

    pub fn flows(&self) -> Option<&FlowResult> {
        self.flows.as_ref()
    }
}
