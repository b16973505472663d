//! 증기압축 냉동 사이클 계산 모듈 모음.
//! 단순 사이클 성능, 2원 캐스케이드 열수지, 냉매 비교로 구성한다.

pub mod cascade;
pub mod compare;
pub mod simple;

pub use simple::{
    calculate_cycle, calculate_cycle_checked, calculate_simple_cycle, CycleError, CycleInputs,
    CycleModel, CycleResult,
};
