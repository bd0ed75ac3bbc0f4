//! 계산 결과를 화면에 보여 주기 위한 포맷.
//!
//! 화학식은 `원소기호 + 숫자` 묶음의 숫자 부분을 아래 첨자로 바꿔 그린다.
//! 수치 계약과는 무관한 표시 전용 처리다.

use regex::Regex;
use std::sync::OnceLock;

use crate::biomass::{BiomassReport, FlowResult};
use crate::number::{format_number, to_fixed};

/// 화학식 조각.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaSegment {
    Text(String),
    Subscript(String),
}

fn element_count_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"([A-Z][a-z]*)(\d+(\.\d+)?)").expect("valid regex"))
}

/// 화학식/연소식을 일반 글자와 아래 첨자 조각으로 나눈다.
pub fn formula_segments(formula: &str) -> Vec<FormulaSegment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for caps in element_count_pattern().captures_iter(formula) {
        let (Some(whole), Some(symbol), Some(count)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        push_text(&mut segments, &formula[last..whole.start()]);
        push_text(&mut segments, symbol.as_str());
        segments.push(FormulaSegment::Subscript(count.as_str().to_string()));
        last = whole.end();
    }
    push_text(&mut segments, &formula[last..]);
    segments
}

fn push_text(segments: &mut Vec<FormulaSegment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(FormulaSegment::Text(prev)) = segments.last_mut() {
        prev.push_str(text);
    } else {
        segments.push(FormulaSegment::Text(text.to_string()));
    }
}

/// `<sub>` 태그로 감싼 HTML 문자열.
pub fn formula_html(formula: &str) -> String {
    formula_segments(formula)
        .into_iter()
        .map(|segment| match segment {
            FormulaSegment::Text(t) => t,
            FormulaSegment::Subscript(s) => format!("<sub>{s}</sub>"),
        })
        .collect()
}

/// 유니코드 아래 첨자 숫자로 바꾼 문자열. 터미널 출력용이다.
pub fn formula_unicode(formula: &str) -> String {
    formula_segments(formula)
        .into_iter()
        .map(|segment| match segment {
            FormulaSegment::Text(t) => t,
            FormulaSegment::Subscript(s) => s.chars().map(subscript_char).collect(),
        })
        .collect()
}

fn subscript_char(c: char) -> char {
    match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        other => other,
    }
}

/// 발열량 표시. 아직 없으면 `Loading...`.
pub fn lhv_line(lhv_mj_per_kg: Option<f64>) -> String {
    match lhv_mj_per_kg {
        Some(v) => format!("PC: {} MJ/kg", format_number(v)),
        None => "PC: Loading...".to_string(),
    }
}

/// 유량 결과를 표시용 (이름, 값) 목록으로 만든다. 값은 소수점 2자리 kg/s.
pub fn flow_lines(flows: &FlowResult) -> Vec<(&'static str, String)> {
    vec![
        ("Fuel mass flow (input)", kg_per_s(flows.mass_flow_fuel)),
        ("CO2 mass flow", kg_per_s(flows.mass_flow_co2)),
        ("H2O mass flow", kg_per_s(flows.mass_flow_h2o)),
        ("Total mass flow (output)", kg_per_s(flows.mass_flow_total)),
    ]
}

/// 일괄 실행 결과를 HTML 조각으로 만든다. 화학식 숫자는 `<sub>`로 감싼다.
pub fn report_html(report: &BiomassReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("<p>{}</p>\n", lhv_line(report.lhv_mj_per_kg)));
    if let Some(formula) = &report.formula {
        out.push_str("<h2>Calculated Empirical Formula</h2>\n");
        out.push_str(&format!("<p>{}</p>\n", formula_html(formula.as_str())));
    }
    if let Some(equation) = &report.equation {
        out.push_str("<h2>Combustion Equation</h2>\n");
        out.push_str(&format!("<p>{}</p>\n", formula_html(&equation.to_string())));
    }
    if let Some(flows) = &report.flows {
        out.push_str("<ul>\n");
        for (label, value) in flow_lines(flows) {
            out.push_str(&format!("<li>{label}: {value}</li>\n"));
        }
        out.push_str("</ul>\n");
    }
    out
}

fn kg_per_s(value: f64) -> String {
    format!("{} kg/s", to_fixed(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_is_split_into_subscripts() {
        let segments = formula_segments("C1.51H2.16O1.00");
        assert_eq!(
            segments,
            vec![
                FormulaSegment::Text("C".into()),
                FormulaSegment::Subscript("1.51".into()),
                FormulaSegment::Text("H".into()),
                FormulaSegment::Subscript("2.16".into()),
                FormulaSegment::Text("O".into()),
                FormulaSegment::Subscript("1.00".into()),
            ]
        );
    }

    #[test]
    fn equation_html_marks_every_count() {
        let html = formula_html("C1H4O0 + 2O2 -> 1CO2 + 2H2O");
        assert_eq!(
            html,
            "C<sub>1</sub>H<sub>4</sub>O<sub>0</sub> + 2O<sub>2</sub> -> 1CO<sub>2</sub> + 2H<sub>2</sub>O"
        );
    }

    #[test]
    fn unicode_rendering_keeps_decimal_point() {
        assert_eq!(formula_unicode("C1.5H2O1"), "C₁.₅H₂O₁");
    }

    #[test]
    fn lhv_absent_shows_loading() {
        assert_eq!(lhv_line(None), "PC: Loading...");
        assert_eq!(lhv_line(Some(18.5)), "PC: 18.5 MJ/kg");
    }
}
