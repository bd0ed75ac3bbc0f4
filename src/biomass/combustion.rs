use serde::{Deserialize, Serialize};
use std::fmt;

use crate::biomass::formula::ElementRatios;
use crate::number::{format_number, round_to};

/// 연료 1몰 기준 완전연소식 `CcHhOo + d O2 -> e CO2 + f H2O`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombustionEquation {
    /// 숫자 비를 그대로 쓴 연료식 (`C1.51H2.16O1`)
    pub fuel_formula: String,
    /// d, 소수점 2자리. 산소가 많은 연료에서는 0 이하일 수 있다.
    pub oxygen_coeff: f64,
    /// e
    pub co2_coeff: f64,
    /// f, 소수점 2자리
    pub h2o_coeff: f64,
}

/// 반올림된 몰비로 연소식을 세운다.
pub fn build_combustion_equation(ratios: &ElementRatios) -> CombustionEquation {
    let ElementRatios { c, h, o } = *ratios;
    CombustionEquation {
        fuel_formula: format!(
            "C{}H{}O{}",
            format_number(c),
            format_number(h),
            format_number(o)
        ),
        oxygen_coeff: round_to(c + h / 4.0 - o / 2.0, 2),
        co2_coeff: c,
        h2o_coeff: round_to(h / 2.0, 2),
    }
}

/// 계수는 고정 소수점이 아닌 가장 짧은 형태로 쓴다 (`2O2`, `2.00O2`가 아님).
impl fmt::Display for CombustionEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {}O2 -> {}CO2 + {}H2O",
            self.fuel_formula,
            format_number(self.oxygen_coeff),
            format_number(self.co2_coeff),
            format_number(self.h2o_coeff)
        )
    }
}
