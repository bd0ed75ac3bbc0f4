use crate::dataset::Row;

/// 저위발열량 행의 property 값.
pub const LHV_PROPERTY: &str = "Net calorific value (LHV)";

/// 저위발열량(LHV) [MJ/kg]을 찾는다.
///
/// 처음 일치한 행의 `ar_value`를 숫자로 읽는다. 해당 행이 없으면 `None`이며,
/// 행은 있지만 값을 읽을 수 없으면 NaN을 돌려준다. 단위 변환은 하지 않는다.
pub fn extract_lhv(rows: &[Row]) -> Option<f64> {
    rows.iter()
        .find(|row| row.property.as_deref() == Some(LHV_PROPERTY))
        .map(Row::ar_value_f64)
}
