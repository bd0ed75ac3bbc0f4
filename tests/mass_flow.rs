//! 질량유량 계산 회귀 테스트.
mod common;

use biomass_calculator::biomass::{calculate_flows, mass_flows, ElementRatios, FlowInput};
use biomass_calculator::display::flow_lines;
use biomass_calculator::number::to_fixed;
use common::assert_close;

const RATIOS: ElementRatios = ElementRatios { c: 1.0, h: 2.0, o: 1.0 };

#[test]
fn reference_flows() {
    // P=10 MW, r=0.3, PC=15 MJ/kg
    let flows = calculate_flows("10", "0.3", Some(15.0), &RATIOS).expect("flows");
    assert_close("fuel", flows.mass_flow_fuel, 10.0 / 4.5, 1e-9);
    assert_eq!(to_fixed(flows.mass_flow_fuel, 2), "2.22");
    assert_eq!(to_fixed(flows.mass_flow_co2, 2), "2.22");
    assert_eq!(to_fixed(flows.mass_flow_h2o, 2), "2.22");
    assert_eq!(to_fixed(flows.mass_flow_total, 2), "4.44");
}

#[test]
fn product_flows_follow_ratios() {
    let ratios = ElementRatios { c: 1.51, h: 2.16, o: 1.0 };
    let input = FlowInput {
        power_mw: 20.0,
        efficiency: 0.85,
        lhv_mj_per_kg: 18.5,
    };
    let flows = mass_flows(input, &ratios).expect("flows");
    let fuel = 20.0 / (0.85 * 18.5);
    assert_close("fuel", flows.mass_flow_fuel, fuel, 1e-12);
    assert_close("co2", flows.mass_flow_co2, 1.51 * fuel, 1e-9);
    assert_close("h2o", flows.mass_flow_h2o, 1.08 * fuel, 1e-9);
    assert_close(
        "total",
        flows.mass_flow_total,
        flows.mass_flow_co2 + flows.mass_flow_h2o,
        1e-12,
    );
}

#[test]
fn zero_or_unreadable_inputs_skip_calculation() {
    assert!(calculate_flows("0", "0.3", Some(15.0), &RATIOS).is_none());
    assert!(calculate_flows("10", "", Some(15.0), &RATIOS).is_none());
    assert!(calculate_flows("abc", "0.3", Some(15.0), &RATIOS).is_none());
    assert!(calculate_flows("10", "0.3", Some(0.0), &RATIOS).is_none());
    assert!(calculate_flows("10", "0.3", Some(f64::NAN), &RATIOS).is_none());
    assert!(calculate_flows("10", "0.3", None, &RATIOS).is_none());
}

#[test]
fn non_positive_ratios_skip_calculation() {
    let zero = ElementRatios { c: 0.0, h: 0.0, o: 0.0 };
    assert!(calculate_flows("10", "0.3", Some(15.0), &zero).is_none());
    let negative_carbon = ElementRatios { c: -1.0, h: 2.0, o: 1.0 };
    assert!(calculate_flows("10", "0.3", Some(15.0), &negative_carbon).is_none());
    let input = FlowInput {
        power_mw: 10.0,
        efficiency: 0.3,
        lhv_mj_per_kg: 15.0,
    };
    let no_oxygen = ElementRatios { c: 1.0, h: 2.0, o: 0.0 };
    assert!(mass_flows(input, &no_oxygen).is_none());
    assert!(mass_flows(input, &ElementRatios { c: 1.0, h: f64::NAN, o: 1.0 }).is_none());
}

#[test]
fn efficiency_range_is_not_enforced() {
    let flows = calculate_flows("10", "2", Some(10.0), &RATIOS).expect("flows");
    assert_close("fuel", flows.mass_flow_fuel, 0.5, 1e-12);
    let flows = calculate_flows("10", "-0.5", Some(10.0), &RATIOS).expect("flows");
    assert!(flows.mass_flow_fuel < 0.0);
}

#[test]
fn numeric_prefix_inputs_are_accepted() {
    let flows = calculate_flows(" 10 MW", "0.3", Some(15.0), &RATIOS).expect("flows");
    assert_eq!(to_fixed(flows.mass_flow_fuel, 2), "2.22");
}

#[test]
fn flow_lines_are_two_decimals_in_kg_per_s() {
    let flows = calculate_flows("10", "0.3", Some(15.0), &RATIOS).expect("flows");
    let lines = flow_lines(&flows);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].1, "2.22 kg/s");
    assert_eq!(lines[3].1, "4.44 kg/s");
}

#[test]
fn recomputation_is_identical() {
    let a = calculate_flows("12.5", "0.42", Some(17.3), &RATIOS);
    let b = calculate_flows("12.5", "0.42", Some(17.3), &RATIOS);
    assert_eq!(a, b);
}
