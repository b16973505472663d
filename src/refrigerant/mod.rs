//! 냉매 물성 관련 모듈 모음.
//!
//! - `constants`: 포화압력 곡선맞춤(Antoine) 계수 테이블
//! - `saturation`: 온도 ↔ 포화압력 추정
//! - `database`: 안전등급·GWP·LFL·운전 한계 카탈로그
//! - `pt_chart`: 게이지 압력 기준 PT 차트

pub mod constants;
pub mod database;
pub mod pt_chart;
pub mod saturation;

pub use constants::{lookup, try_lookup, RefrigerantConstants, DEFAULT_REFRIGERANT};
pub use database::{find, OperatingCheck, RefrigerantProperties, SafetyClass};
pub use saturation::{saturation_pressure, saturation_temperature_c};
