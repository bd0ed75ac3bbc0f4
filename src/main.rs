use anyhow::{Context, Result};
use biomass_calculator::{
    app::{self, BatchRequest, OutputFormat},
    biomass::FilterCriterion,
    config,
    number::format_number,
    session::Session,
    workbook,
};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// 바이오매스 물성 시트로 실험식, 연소식, 질량유량을 계산한다.
#[derive(Parser)]
#[command(name = "biomass_calculator_cli", version, about, long_about = None)]
struct Cli {
    /// 불러올 워크북 (xlsx/xls/ods)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// 바이오매스 이름으로 추출 (일괄 실행)
    #[arg(short, long, conflicts_with = "id")]
    name: Option<String>,

    /// 바이오매스 ID로 추출 (일괄 실행)
    #[arg(long)]
    id: Option<String>,

    /// 열출력 [MW]
    #[arg(short, long)]
    power: Option<String>,

    /// 효율 (0~1)
    #[arg(short, long)]
    efficiency: Option<String>,

    /// 설정 파일 경로
    #[arg(short, long, value_name = "PATH", default_value = config::CONFIG_FILE)]
    config: PathBuf,

    /// 일괄 실행 출력 형식
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err:#}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = config::load_or_create(&cli.config)
        .with_context(|| format!("설정을 읽을 수 없음: {}", cli.config.display()))?;

    let criterion = match (cli.name, cli.id) {
        (Some(name), _) => Some(FilterCriterion::Name(name)),
        (None, Some(id)) => Some(FilterCriterion::Id(id)),
        (None, None) => None,
    };

    if let (Some(path), Some(criterion)) = (cli.file.as_deref(), criterion) {
        let or_default = |arg: Option<String>, default: Option<f64>| {
            arg.or_else(|| default.map(format_number)).unwrap_or_default()
        };
        let request = BatchRequest {
            workbook: path,
            criterion,
            power: or_default(cli.power, cfg.defaults.power_mw),
            efficiency: or_default(cli.efficiency, cfg.defaults.efficiency),
            format: cli.format,
        };
        app::run_batch(&cfg, request)?;
        return Ok(());
    }

    let mut session = Session::new();
    if let Some(path) = cli.file {
        let dataset = workbook::read_first_sheet(&path, &cfg.columns)
            .with_context(|| format!("워크북을 읽을 수 없음: {}", path.display()))?;
        session.load_dataset(dataset);
        cfg.last_workbook = Some(path);
    }
    app::run(&mut cfg, &mut session, &cli.config)?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
