use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::dataset::Row;
use crate::number::{round_to, to_fixed};

/// 원자량 [g/mol]
pub const ATOMIC_WEIGHT_C: f64 = 12.01;
pub const ATOMIC_WEIGHT_H: f64 = 1.01;
pub const ATOMIC_WEIGHT_O: f64 = 16.00;

pub const CARBON_PROPERTY: &str = "Carbon";
pub const HYDROGEN_PROPERTY: &str = "Hydrogen";
pub const OXYGEN_PROPERTY: &str = "Oxygen";

/// 가장 작은 원소를 1로 맞춘 C/H/O 몰비. 각 값은 소수점 2자리로 반올림되어 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRatios {
    pub c: f64,
    pub h: f64,
    pub o: f64,
}

impl ElementRatios {
    /// 세 값이 모두 양수인지 확인한다. 실험식과 유량 계산의 전제 조건이다.
    pub fn is_valid(&self) -> bool {
        self.c > 0.0 && self.h > 0.0 && self.o > 0.0
    }
}

/// 표시용 실험식 문자열 (`C1.51H2.16O1.00`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmpiricalFormula(pub String);

impl EmpiricalFormula {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmpiricalFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 행에 기록된 C/H/O 질량분율.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementFractions {
    pub carbon: f64,
    pub hydrogen: f64,
    pub oxygen: f64,
}

/// 필터된 행에서 C/H/O 값을 모은다. 같은 원소가 여러 번 나오면 마지막 값을 쓴다.
///
/// 어느 하나라도 없거나 0 이하(또는 숫자가 아님)이면 `None`.
pub fn element_fractions(rows: &[Row]) -> Option<ElementFractions> {
    let (mut carbon, mut hydrogen, mut oxygen) = (None, None, None);
    for row in rows {
        let slot = match row.property.as_deref() {
            Some(CARBON_PROPERTY) => &mut carbon,
            Some(HYDROGEN_PROPERTY) => &mut hydrogen,
            Some(OXYGEN_PROPERTY) => &mut oxygen,
            _ => continue,
        };
        *slot = Some(row.ar_value_f64());
    }
    let positive = |v: Option<f64>| v.filter(|x| *x > 0.0);
    Some(ElementFractions {
        carbon: positive(carbon)?,
        hydrogen: positive(hydrogen)?,
        oxygen: positive(oxygen)?,
    })
}

/// 질량분율에서 실험식을 구한다.
///
/// 몰수로 바꾼 뒤 가장 작은 몰수로 나누고, 그 다음에 각각 소수점 2자리로 반올림한다.
/// 최소 원소의 비가 정확히 1.00이 아닐 수도 있으며 보정하지 않는다.
pub fn derive_formula(rows: &[Row]) -> Option<(ElementRatios, EmpiricalFormula)> {
    let fractions = element_fractions(rows)?;

    let moles_c = fractions.carbon / ATOMIC_WEIGHT_C;
    let moles_h = fractions.hydrogen / ATOMIC_WEIGHT_H;
    let moles_o = fractions.oxygen / ATOMIC_WEIGHT_O;
    let min_moles = moles_c.min(moles_h).min(moles_o);

    let ratio_c = to_fixed(moles_c / min_moles, 2);
    let ratio_h = to_fixed(moles_h / min_moles, 2);
    let ratio_o = to_fixed(moles_o / min_moles, 2);

    let formula = EmpiricalFormula(format!("C{ratio_c}H{ratio_h}O{ratio_o}"));
    let ratios = ElementRatios {
        c: round_to(moles_c / min_moles, 2),
        h: round_to(moles_h / min_moles, 2),
        o: round_to(moles_o / min_moles, 2),
    };
    debug!(%formula, ?ratios, "empirical formula derived");
    Some((ratios, formula))
}
