use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::AppError;
use crate::biomass::BiomassReport;
use crate::config::Config;
use crate::dataset::{display_columns, Row};
use crate::display;
use crate::number::format_number;
use crate::session::Session;
use crate::workbook;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LoadWorkbook,
    FilterByName,
    FilterById,
    ShowDataset,
    EmpiricalFormula,
    MassFlows,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(session: &Session) -> Result<MenuChoice, AppError> {
    println!("\n=== Biomass Calculator ===");
    match session.dataset() {
        Some(ds) => println!("불러온 행: {}, 필터된 행: {}", ds.len(), session.filtered().len()),
        None => println!("No file uploaded"),
    }
    println!("1) 워크북 불러오기");
    println!("2) 이름으로 추출");
    println!("3) ID로 추출");
    println!("4) 원본 데이터 보기");
    println!("5) 실험식/연소식 계산");
    println!("6) 질량유량 계산");
    println!("7) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::LoadWorkbook),
            "2" => return Ok(MenuChoice::FilterByName),
            "3" => return Ok(MenuChoice::FilterById),
            "4" => return Ok(MenuChoice::ShowDataset),
            "5" => return Ok(MenuChoice::EmpiricalFormula),
            "6" => return Ok(MenuChoice::MassFlows),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 워크북 경로를 받아 첫 시트를 불러온다.
pub fn handle_load_workbook(cfg: &mut Config, session: &mut Session) -> Result<(), AppError> {
    println!("\n-- 워크북 불러오기 --");
    if let Some(last) = &cfg.last_workbook {
        println!("마지막 파일: {} (엔터 시 재사용)", last.display());
    }
    let input = read_line("파일 경로: ")?;
    let path = match (input.trim(), &cfg.last_workbook) {
        ("", Some(last)) => last.clone(),
        ("", None) => return Ok(()),
        (p, _) => PathBuf::from(p),
    };
    match workbook::read_first_sheet(&path, &cfg.columns) {
        Ok(dataset) => {
            println!("{}개 행을 불러왔습니다.", dataset.len());
            if !dataset.issues.is_empty() {
                println!("필수 열이 빠진 행: {}개", dataset.issues.len());
            }
            session.load_dataset(dataset);
            cfg.last_workbook = Some(path);
        }
        Err(e) => println!("워크북을 읽지 못했습니다: {e}"),
    }
    Ok(())
}

/// 이름으로 행을 추출한다.
pub fn handle_filter_by_name(session: &mut Session) -> Result<(), AppError> {
    let name = read_line("바이오매스 이름: ")?;
    if session.filter_by_name(&name) {
        print_filtered(session);
    }
    Ok(())
}

/// ID로 행을 추출한다.
pub fn handle_filter_by_id(session: &mut Session) -> Result<(), AppError> {
    let id = read_line("바이오매스 ID: ")?;
    if session.filter_by_id(&id) {
        print_filtered(session);
    }
    Ok(())
}

fn print_filtered(session: &Session) {
    if session.filtered().is_empty() {
        return;
    }
    println!("\n-- Filtered Data --");
    print_rows(session.filtered());
    println!("{}", display::lhv_line(session.lhv_mj_per_kg()));
}

/// 원본 데이터를 표로 출력한다.
pub fn handle_show_dataset(session: &Session) {
    match session.dataset() {
        Some(ds) if !ds.is_empty() => {
            println!("\n-- Original Excel Data --");
            print_rows(&ds.rows);
        }
        _ => println!("No file uploaded"),
    }
}

/// 실험식과 연소식을 계산해 출력한다.
pub fn handle_formula(session: &mut Session) {
    session.compute_formula();
    if let (Some(formula), Some(equation)) = (session.formula(), session.equation()) {
        println!("\n-- Calculated Empirical Formula --");
        println!("{}", display::formula_unicode(formula.as_str()));
        println!("-- Combustion Equation --");
        println!("{}", display::formula_unicode(&equation.to_string()));
    }
}

/// 출력/효율을 받아 질량유량을 계산한다.
pub fn handle_mass_flows(cfg: &Config, session: &mut Session) -> Result<(), AppError> {
    if session.formula().is_none() {
        println!("먼저 실험식을 계산하세요.");
        return Ok(());
    }
    println!("\n-- Debit Massique --");
    println!("{}", display::lhv_line(session.lhv_mj_per_kg()));
    let power = read_with_default("Puissance en MW", cfg.defaults.power_mw)?;
    let efficiency = read_with_default("Rendement (0~1)", cfg.defaults.efficiency)?;
    session.compute_flows(&power, &efficiency);
    if let Some(flows) = session.flows() {
        for (label, value) in display::flow_lines(flows) {
            println!("{label}: {value}");
        }
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!(
        "열 이름: name={}, id={}, property={}, value={}",
        cfg.columns.biomass_name, cfg.columns.biomass_id, cfg.columns.property, cfg.columns.ar_value
    );
    println!("1) 기본 출력/효율 변경  2) 열 이름 변경");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => {}
        "1" => {
            cfg.defaults.power_mw = read_optional_f64("기본 출력 [MW] (없으면 엔터): ")?;
            cfg.defaults.efficiency = read_optional_f64("기본 효율 (없으면 엔터): ")?;
        }
        "2" => {
            replace_if_given(&mut cfg.columns.biomass_name, "이름 열")?;
            replace_if_given(&mut cfg.columns.biomass_id, "ID 열")?;
            replace_if_given(&mut cfg.columns.property, "항목 열")?;
            replace_if_given(&mut cfg.columns.ar_value, "값 열")?;
            println!("다음에 불러오는 워크북부터 적용됩니다.");
        }
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

fn replace_if_given(slot: &mut String, label: &str) -> Result<(), AppError> {
    let input = read_line(&format!("{label} [{slot}]: "))?;
    if !input.trim().is_empty() {
        *slot = input.trim().to_string();
    }
    Ok(())
}

fn print_rows(rows: &[Row]) {
    let columns = display_columns(rows);
    println!("{}", columns.join(" | "));
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| row.get(c).map(ToString::to_string).unwrap_or_default())
            .collect();
        println!("{}", cells.join(" | "));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_with_default(label: &str, default: Option<f64>) -> Result<String, AppError> {
    let prompt = match default {
        Some(v) => format!("{label} [{}]: ", format_number(v)),
        None => format!("{label}: "),
    };
    let input = read_line(&prompt)?;
    Ok(match (input.trim(), default) {
        ("", Some(v)) => format_number(v),
        (text, _) => text.to_string(),
    })
}

fn read_optional_f64(prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        if s.trim().is_empty() {
            return Ok(None);
        }
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

/// 일괄 실행 결과를 출력한다.
pub fn print_report(report: &BiomassReport) {
    if report.rows.is_empty() {
        println!("일치하는 행이 없습니다: {:?}", report.criterion);
        return;
    }
    println!("-- Filtered Data --");
    print_rows(&report.rows);
    println!("{}", display::lhv_line(report.lhv_mj_per_kg));
    if let (Some(formula), Some(equation)) = (&report.formula, &report.equation) {
        println!("Empirical formula: {}", display::formula_unicode(formula.as_str()));
        println!(
            "Combustion equation: {}",
            display::formula_unicode(&equation.to_string())
        );
    }
    if let Some(flows) = &report.flows {
        for (label, value) in display::flow_lines(flows) {
            println!("{label}: {value}");
        }
    }
}
