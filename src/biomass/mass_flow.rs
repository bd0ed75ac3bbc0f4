use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::biomass::formula::ElementRatios;
use crate::number::{is_nonzero, parse_float};

/// 분자량 [g/mol]
pub const MOLECULAR_WEIGHT_CO2: f64 = 44.01;
pub const MOLECULAR_WEIGHT_H2O: f64 = 18.02;

/// 연료 질량유량 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowInput {
    /// 열출력 [MW]
    pub power_mw: f64,
    /// 효율 (0~1, 범위는 강제하지 않음)
    pub efficiency: f64,
    /// 저위발열량 [MJ/kg]
    pub lhv_mj_per_kg: f64,
}

impl FlowInput {
    /// 폼 문자열을 읽는다. 세 값 중 하나라도 0이거나 숫자가 아니면 `None`.
    pub fn parse(power: &str, efficiency: &str, lhv_mj_per_kg: Option<f64>) -> Option<Self> {
        let input = Self {
            power_mw: parse_float(power),
            efficiency: parse_float(efficiency),
            lhv_mj_per_kg: lhv_mj_per_kg?,
        };
        input.is_usable().then_some(input)
    }

    fn is_usable(&self) -> bool {
        is_nonzero(self.power_mw) && is_nonzero(self.efficiency) && is_nonzero(self.lhv_mj_per_kg)
    }
}

/// 질량유량 계산 결과 [kg/s]. 값은 반올림 전 원값이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowResult {
    /// 연료 투입 유량
    pub mass_flow_fuel: f64,
    pub mass_flow_co2: f64,
    pub mass_flow_h2o: f64,
    /// CO2 + H2O 배출 유량
    pub mass_flow_total: f64,
}

/// 폼 입력 문자열로 질량유량을 계산한다.
pub fn calculate_flows(
    power: &str,
    efficiency: &str,
    lhv_mj_per_kg: Option<f64>,
    ratios: &ElementRatios,
) -> Option<FlowResult> {
    let input = FlowInput::parse(power, efficiency, lhv_mj_per_kg)?;
    mass_flows(input, ratios)
}

/// 질량유량을 계산한다. 입력 값 중 0이나 NaN이 있거나 몰비가 양수가 아니면 `None`.
///
/// MW / (MJ/kg) = kg/s 이므로 연료 유량은 `P / (r * PC)`이다.
/// CO2/H2O는 몰수를 거쳐 질량으로 되돌리는 경로를 그대로 따른다.
pub fn mass_flows(input: FlowInput, ratios: &ElementRatios) -> Option<FlowResult> {
    if !input.is_usable() || !ratios.is_valid() {
        return None;
    }
    let mass_flow_fuel = input.power_mw / (input.efficiency * input.lhv_mj_per_kg);

    let moles_co2 = ratios.c * mass_flow_fuel / MOLECULAR_WEIGHT_CO2;
    let moles_h2o = (ratios.h / 2.0) * mass_flow_fuel / MOLECULAR_WEIGHT_H2O;

    let mass_flow_co2 = moles_co2 * MOLECULAR_WEIGHT_CO2;
    let mass_flow_h2o = moles_h2o * MOLECULAR_WEIGHT_H2O;

    let result = FlowResult {
        mass_flow_fuel,
        mass_flow_co2,
        mass_flow_h2o,
        mass_flow_total: mass_flow_co2 + mass_flow_h2o,
    };
    debug!(?input, ?result, "mass flows calculated");
    Some(result)
}
