use std::path::Path;
use thiserror::Error;

use crate::biomass::{run_pipeline, FilterCriterion};
use crate::config::{Config, ConfigError};
use crate::display;
use crate::session::Session;
use crate::ui_cli::{self, MenuChoice};
use crate::workbook::{self, WorkbookError};

/// 일괄 실행 결과 출력 형식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// 사람이 읽는 텍스트 (기본값)
    #[default]
    Text,
    /// JSON
    Json,
    /// 아래 첨자가 들어간 HTML 조각
    Html,
}

/// 일괄 실행 입력.
#[derive(Debug, Clone)]
pub struct BatchRequest<'a> {
    pub workbook: &'a Path,
    pub criterion: FilterCriterion,
    pub power: String,
    pub efficiency: String,
    pub format: OutputFormat,
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("워크북 오류: {0}")]
    Workbook(#[from] WorkbookError),
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(
    config: &mut Config,
    session: &mut Session,
    config_path: &Path,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(session)? {
            MenuChoice::LoadWorkbook => {
                ui_cli::handle_load_workbook(config, session)?;
                config.save_to(config_path)?;
            }
            MenuChoice::FilterByName => ui_cli::handle_filter_by_name(session)?,
            MenuChoice::FilterById => ui_cli::handle_filter_by_id(session)?,
            MenuChoice::ShowDataset => ui_cli::handle_show_dataset(session),
            MenuChoice::EmpiricalFormula => ui_cli::handle_formula(session),
            MenuChoice::MassFlows => ui_cli::handle_mass_flows(config, session)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save_to(config_path)?;
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}

/// 워크북 하나를 읽어 지정한 바이오매스의 계산 결과를 한 번에 출력한다.
pub fn run_batch(config: &Config, request: BatchRequest<'_>) -> Result<(), AppError> {
    let dataset = workbook::read_first_sheet(request.workbook, &config.columns)?;
    let report = run_pipeline(
        Some(&dataset),
        request.criterion,
        &request.power,
        &request.efficiency,
    );
    match request.format {
        OutputFormat::Text => ui_cli::print_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Html => print!("{}", display::report_html(&report)),
    }
    Ok(())
}
