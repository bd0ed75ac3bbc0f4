use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// 기본 설정 파일 경로.
pub const CONFIG_FILE: &str = "config.toml";

/// 시트에서 읽을 열 머리 이름.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub biomass_name: String,
    pub biomass_id: String,
    pub property: String,
    pub ar_value: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            biomass_name: "biomass_name".to_string(),
            biomass_id: "biomass_id".to_string(),
            property: "property".to_string(),
            ar_value: "ar_value".to_string(),
        }
    }
}

/// 유량 계산 폼에 미리 채워 둘 값.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowDefaults {
    /// 열출력 [MW]
    pub power_mw: Option<f64>,
    /// 효율 (0~1)
    pub efficiency: Option<f64>,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 마지막으로 연 워크북
    pub last_workbook: Option<PathBuf>,
    pub columns: ColumnNames,
    pub defaults: FlowDefaults,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(CONFIG_FILE))
}

/// 지정한 경로의 설정을 로드하고, 파일이 없으면 기본값으로 만들어 저장한다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load_from(path)
    } else {
        info!(path = %path.display(), "config not found, writing defaults");
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

/// 지정한 경로의 설정을 읽는다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
