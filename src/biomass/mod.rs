//! 바이오매스 계산 파이프라인.
//!
//! 행 필터 -> 발열량 추출 -> 실험식/연소식 -> 질량유량 순서로 진행하며,
//! 각 단계는 입력만으로 결과를 새로 만드는 순수 함수다.

pub mod calorific;
pub mod combustion;
pub mod formula;
pub mod mass_flow;
pub mod pipeline;
pub mod row_filter;

pub use calorific::*;
pub use combustion::*;
pub use formula::*;
pub use mass_flow::*;
pub use pipeline::*;
pub use row_filter::*;
