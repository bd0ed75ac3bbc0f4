//! 바이오매스 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 코드를 쓰도록 한다.

pub mod app;
pub mod biomass;
pub mod config;
pub mod dataset;
pub mod display;
pub mod number;
pub mod session;
pub mod ui_cli;
pub mod workbook;
